use crate::error::OpError;
use crate::event::{GatewayResponse, status};
use crate::models::ItemPayload;
use crate::store::ItemStore;
use crate::validate::{RequiredField, check_fields};

/// PUT /api/items/{id} - Fully replace an item's fields
///
/// `name` and `price` are required. The item must already exist; the
/// existence check and the update are two independent storage calls with no
/// transactional linkage. The update writes null for a field the payload does
/// not provide, as opposed to the partial update's fall-back to the stored
/// value.
pub async fn replace_item<S: ItemStore>(
    store: &S,
    id: &str,
    body: Option<&str>,
) -> Result<GatewayResponse, OpError> {
    let payload = ItemPayload::parse(body)?;
    check_fields(&payload, &[RequiredField::Name, RequiredField::Price])?;

    if store.get(id).await?.is_none() {
        return Err(OpError::item_not_found());
    }

    let updated = store
        .update(
            id,
            payload.provided_name().map(str::to_owned),
            payload.provided_price(),
        )
        .await?;

    Ok(GatewayResponse::json(status::OK, &updated)?)
}
