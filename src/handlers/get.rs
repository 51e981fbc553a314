use crate::error::OpError;
use crate::event::{GatewayResponse, status};
use crate::store::ItemStore;

/// GET /api/items/{id} - Retrieve one item
pub async fn find_item<S: ItemStore>(store: &S, id: &str) -> Result<GatewayResponse, OpError> {
    match store.get(id).await? {
        Some(item) => Ok(GatewayResponse::json(status::OK, &item)?),
        None => Err(OpError::item_not_found()),
    }
}
