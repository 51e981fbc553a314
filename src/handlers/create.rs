use uuid::Uuid;

use crate::error::OpError;
use crate::event::{GatewayResponse, status};
use crate::models::{Item, ItemPayload};
use crate::store::ItemStore;
use crate::validate::{RequiredField, check_fields};

/// POST /api/items - Create an item
///
/// `name` and `price` are required. The client may supply its own id; an
/// absent or empty id gets a freshly generated one. The write is an
/// unconditional upsert, so a client-supplied id that already exists is
/// overwritten.
pub async fn create_item<S: ItemStore>(
    store: &S,
    body: Option<&str>,
) -> Result<GatewayResponse, OpError> {
    let payload = ItemPayload::parse(body)?;
    check_fields(&payload, &[RequiredField::Name, RequiredField::Price])?;

    let item = Item {
        id: payload
            .provided_id()
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: payload.provided_name().map(str::to_owned),
        price: payload.provided_price(),
    };

    store.put(&item).await?;

    Ok(GatewayResponse::json(status::CREATED, &item)?)
}
