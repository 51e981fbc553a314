use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use serde_json::Number;

use super::ItemStore;
use crate::config::Config;
use crate::models::Item;

/// Shareable DynamoDB-backed store for the items table.
///
/// The underlying SDK client is a stateless transport handle; one instance is
/// created at process start and cloned per invocation.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Create a store from configuration.
    ///
    /// Credentials and region come from the standard AWS environment. When
    /// `DYNAMODB_ENDPOINT` is set the client targets that endpoint instead,
    /// which is how local runs talk to a DynamoDB Local container.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(endpoint) = &config.dynamodb_endpoint {
            tracing::info!("Connecting to DynamoDB endpoint override: {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        } else {
            tracing::info!("Connecting to AWS DynamoDB");
        }

        let sdk_config = loader.load().await;

        Self {
            client: Client::new(&sdk_config),
            table_name: config.table_name.clone(),
        }
    }
}

impl ItemStore for DynamoStore {
    async fn get(&self, id: &str) -> Result<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_owned()))
            .send()
            .await
            .context("failed to read item from DynamoDB")?;

        output
            .item
            .map(|attributes| item_from_attributes(&attributes))
            .transpose()
    }

    async fn put(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .context("failed to write item to DynamoDB")?;

        tracing::debug!("Stored item with id: {}", item.id);
        Ok(())
    }

    async fn update(&self, id: &str, name: Option<String>, price: Option<Number>) -> Result<Item> {
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_owned()))
            .update_expression("SET #n = :n, #p = :p")
            .expression_attribute_names("#n", "name")
            .expression_attribute_names("#p", "price")
            .expression_attribute_values(":n", string_attribute(name.as_deref()))
            .expression_attribute_values(":p", number_attribute(price.as_ref()))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .context("failed to update item in DynamoDB")?;

        let attributes = output
            .attributes
            .context("DynamoDB update returned no attributes")?;

        tracing::debug!("Updated item with id: {}", id);
        item_from_attributes(&attributes)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_owned()))
            .send()
            .await
            .context("failed to delete item from DynamoDB")?;

        tracing::debug!("Deleted item with id: {}", id);
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Item>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .context("failed to scan items table")?;

        output
            .items
            .unwrap_or_default()
            .iter()
            .map(item_from_attributes)
            .collect()
    }
}

fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("id".to_owned(), AttributeValue::S(item.id.clone())),
        ("name".to_owned(), string_attribute(item.name.as_deref())),
        ("price".to_owned(), number_attribute(item.price.as_ref())),
    ])
}

fn string_attribute(value: Option<&str>) -> AttributeValue {
    value.map_or(AttributeValue::Null(true), |s| {
        AttributeValue::S(s.to_owned())
    })
}

fn number_attribute(value: Option<&Number>) -> AttributeValue {
    value.map_or(AttributeValue::Null(true), |n| {
        AttributeValue::N(n.to_string())
    })
}

fn item_from_attributes(attributes: &HashMap<String, AttributeValue>) -> Result<Item> {
    let id = match attributes.get("id") {
        Some(AttributeValue::S(id)) => id.clone(),
        _ => bail!("item record is missing a string id attribute"),
    };

    let name = match attributes.get("name") {
        Some(AttributeValue::S(name)) => Some(name.clone()),
        _ => None,
    };

    let price = match attributes.get("price") {
        Some(AttributeValue::N(raw)) => Some(
            serde_json::from_str(raw).context("item record has a malformed price attribute")?,
        ),
        _ => None,
    };

    Ok(Item { id, name, price })
}
