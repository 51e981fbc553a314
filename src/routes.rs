// Routing keys - single source of truth for dispatch

pub const DELETE_ITEM: &str = "DELETE /api/items/{id}";
pub const GET_ITEM: &str = "GET /api/items/{id}";
pub const LIST_ITEMS: &str = "GET /api/items";
pub const CREATE_ITEM: &str = "POST /api/items";
pub const REPLACE_ITEM: &str = "PUT /api/items/{id}";
pub const PATCH_ITEM: &str = "PATCH /api/items/{id}";
pub const FALLBACK: &str = "$default";

/// Operation selected by exact match on the inbound routing key.
///
/// The route set is fixed; anything the gateway sends outside the six known
/// keys reaches the catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    DeleteItem,
    GetItem,
    ListItems,
    CreateItem,
    ReplaceItem,
    PatchItem,
    Fallback,
}

impl Route {
    pub fn from_key(key: &str) -> Self {
        match key {
            DELETE_ITEM => Self::DeleteItem,
            GET_ITEM => Self::GetItem,
            LIST_ITEMS => Self::ListItems,
            CREATE_ITEM => Self::CreateItem,
            REPLACE_ITEM => Self::ReplaceItem,
            PATCH_ITEM => Self::PatchItem,
            FALLBACK => Self::Fallback,
            // anything else the gateway lets through gets the same treatment
            _ => Self::Fallback,
        }
    }
}
