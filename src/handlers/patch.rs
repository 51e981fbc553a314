use crate::error::OpError;
use crate::event::{GatewayResponse, status};
use crate::models::ItemPayload;
use crate::store::ItemStore;

/// PATCH /api/items/{id} - Partially update an item
///
/// No required fields. A field the payload does not provide keeps the value
/// read in the existence lookup; like replace, the lookup and the update are
/// two independent storage calls.
pub async fn patch_item<S: ItemStore>(
    store: &S,
    id: &str,
    body: Option<&str>,
) -> Result<GatewayResponse, OpError> {
    let payload = ItemPayload::parse(body)?;

    let Some(current) = store.get(id).await? else {
        return Err(OpError::item_not_found());
    };

    let name = payload.provided_name().map(str::to_owned).or(current.name);
    let price = payload.provided_price().or(current.price);

    let updated = store.update(id, name, price).await?;

    Ok(GatewayResponse::json(status::OK, &updated)?)
}
