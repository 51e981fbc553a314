use crate::error::OpError;
use crate::event::{GatewayResponse, status};
use crate::store::ItemStore;

/// GET /api/items - List every item in the collection
///
/// Always responds with an array; an empty collection yields `[]`, never
/// null.
pub async fn find_items<S: ItemStore>(store: &S) -> Result<GatewayResponse, OpError> {
    let items = store.scan_all().await?;
    Ok(GatewayResponse::json(status::OK, &items)?)
}
