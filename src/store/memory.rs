//! In-memory store for unit testing.
//!
//! Implements the same primitives as the DynamoDB store over a shared map so
//! handler and router tests run without a live table.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use serde_json::Number;

use super::ItemStore;
use crate::models::Item;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, Item>>>,
    update_calls: Arc<Mutex<usize>>,
    fail_requests: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the given items.
    pub fn with_items<I: IntoIterator<Item = Item>>(items: I) -> Self {
        let store = Self::new();
        {
            let mut map = store.items.lock().unwrap();
            for item in items {
                map.insert(item.id.clone(), item);
            }
        }
        store
    }

    /// Create a store whose every operation fails, for exercising the
    /// storage-error path.
    pub fn failing() -> Self {
        Self {
            fail_requests: true,
            ..Self::default()
        }
    }

    /// Number of conditional-update calls issued so far.
    pub fn update_calls(&self) -> usize {
        *self.update_calls.lock().unwrap()
    }

    pub fn item_count(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<()> {
        if self.fail_requests {
            bail!("storage backend unavailable");
        }
        Ok(())
    }
}

impl ItemStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Item>> {
        self.check_available()?;
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn put(&self, item: &Item) -> Result<()> {
        self.check_available()?;
        self.items
            .lock()
            .unwrap()
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn update(&self, id: &str, name: Option<String>, price: Option<Number>) -> Result<Item> {
        self.check_available()?;
        *self.update_calls.lock().unwrap() += 1;

        // Upsert on a missing key, same as the DynamoDB primitive
        let mut items = self.items.lock().unwrap();
        let entry = items.entry(id.to_owned()).or_insert_with(|| Item {
            id: id.to_owned(),
            name: None,
            price: None,
        });
        entry.name = name;
        entry.price = price;
        Ok(entry.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.check_available()?;
        self.items.lock().unwrap().remove(id);
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Item>> {
        self.check_available()?;
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: i64) -> Item {
        Item {
            id: id.to_string(),
            name: Some(name.to_string()),
            price: Some(Number::from(price)),
        }
    }

    #[tokio::test]
    async fn put_then_get_returns_the_stored_item() {
        let store = MemoryStore::new();
        store.put(&item("1", "item-test", 100)).await.unwrap();

        let found = store.get("1").await.unwrap();
        assert_eq!(found, Some(item("1", "item-test", 100)));
    }

    #[tokio::test]
    async fn get_on_an_absent_key_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_with_none_writes_null_fields() {
        let store = MemoryStore::with_items([item("1", "item-test", 100)]);

        let updated = store
            .update("1", None, Some(Number::from(200)))
            .await
            .unwrap();

        assert_eq!(updated.name, None);
        assert_eq!(updated.price, Some(Number::from(200)));
        assert_eq!(store.get("1").await.unwrap().unwrap().name, None);
    }

    #[tokio::test]
    async fn update_on_an_absent_key_upserts() {
        let store = MemoryStore::new();

        let created = store
            .update("ghost", Some("item-test".to_string()), None)
            .await
            .unwrap();

        assert_eq!(created.id, "ghost");
        assert_eq!(created.name.as_deref(), Some("item-test"));
        assert_eq!(store.item_count(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::with_items([item("1", "item-test", 100)]);
        store.delete("1").await.unwrap();
        store.delete("1").await.unwrap();
        assert_eq!(store.item_count(), 0);
    }

    #[tokio::test]
    async fn scan_all_returns_every_item() {
        let store = MemoryStore::with_items([item("1", "a", 1), item("2", "b", 2)]);
        let mut items = store.scan_all().await.unwrap();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[1].id, "2");
    }

    #[tokio::test]
    async fn failing_store_errors_on_every_primitive() {
        let store = MemoryStore::failing();
        assert!(store.get("1").await.is_err());
        assert!(store.scan_all().await.is_err());
        assert!(store.delete("1").await.is_err());
    }
}
