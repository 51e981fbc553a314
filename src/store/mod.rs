//! Storage collaborator boundary.
//!
//! The service treats storage as a flat key-value collection of items with
//! five primitives. `DynamoStore` is the production implementation;
//! `MemoryStore` backs the tests.

pub mod dynamo;
#[cfg(test)]
pub mod memory;

pub use dynamo::DynamoStore;
#[cfg(test)]
pub use memory::MemoryStore;

use anyhow::Result;
use serde_json::Number;

use crate::models::Item;

/// Key-value storage primitives for the items collection.
pub trait ItemStore {
    /// Fetch one record by key.
    async fn get(&self, id: &str) -> Result<Option<Item>>;

    /// Unconditional upsert of a full record.
    async fn put(&self, item: &Item) -> Result<()>;

    /// Set `name` and `price` on the record with the given key (`None`
    /// writes null) and return the post-update record. Upserts when the key
    /// does not exist; callers that need existence must check first.
    async fn update(&self, id: &str, name: Option<String>, price: Option<Number>) -> Result<Item>;

    /// Remove a record by key. Deleting an absent key is not an error.
    async fn delete(&self, id: &str) -> Result<()>;

    /// All records in the collection, unordered, single page.
    async fn scan_all(&self) -> Result<Vec<Item>>;
}
