use crate::error::OpError;
use crate::event::{GatewayResponse, status};
use crate::store::ItemStore;

/// DELETE /api/items/{id} - Remove an item
///
/// No prior existence check; deleting an absent id succeeds the same way.
pub async fn delete_item<S: ItemStore>(store: &S, id: &str) -> Result<GatewayResponse, OpError> {
    store.delete(id).await?;
    Ok(GatewayResponse::json(status::NO_CONTENT, &serde_json::json!({}))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::store::MemoryStore;
    use serde_json::Number;

    #[tokio::test]
    async fn deleting_an_existing_item_removes_it() {
        let store = MemoryStore::with_items([Item {
            id: "1".to_string(),
            name: Some("item-test".to_string()),
            price: Some(Number::from(100)),
        }]);

        let response = delete_item(&store, "1").await.unwrap();

        assert_eq!(response.status_code, 204);
        assert_eq!(response.body, "{}");
        assert!(store.get("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_an_absent_item_still_succeeds() {
        let store = MemoryStore::new();

        let response = delete_item(&store, "missing").await.unwrap();

        assert_eq!(response.status_code, 204);
        assert_eq!(response.body, "{}");
    }
}
