use std::env;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let table_name =
            env::var("ITEMS_TABLE").context("ITEMS_TABLE environment variable is required")?;

        let dynamodb_endpoint = env::var("DYNAMODB_ENDPOINT").ok();

        Ok(Config {
            table_name,
            dynamodb_endpoint,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Items table: {}", self.table_name);
        tracing::info!(
            "  DynamoDB endpoint: {}",
            self.dynamodb_endpoint
                .as_deref()
                .unwrap_or("default (using AWS)")
        );
    }
}
