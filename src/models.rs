use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::OpError;

/// The persisted entity: a flat record keyed by `id`.
///
/// `name` and `price` are nullable because a full replace writes `null` for
/// any field the client did not supply. `price` is kept as a raw JSON number
/// so the client's representation round-trips through storage unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: Option<String>,
    pub price: Option<Number>,
}

/// Client-supplied request body for create, replace, and partial update.
///
/// Unknown body fields are dropped at deserialization; a wrongly-typed field
/// fails the parse and surfaces through the generic error path.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Number>,
}

impl ItemPayload {
    /// Parse the raw request body. A missing body is an error, same as a
    /// malformed one.
    pub fn parse(body: Option<&str>) -> Result<Self, OpError> {
        let raw = body.ok_or_else(|| OpError::internal("request body is required"))?;
        serde_json::from_str(raw).map_err(OpError::from)
    }

    /// The client id, if present and non-empty.
    pub fn provided_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The name, unless absent or equal to its zero value (empty string).
    pub fn provided_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The price, unless absent or equal to its zero value (any numeric zero).
    pub fn provided_price(&self) -> Option<Number> {
        self.price
            .clone()
            .filter(|price| price.as_f64() != Some(0.0))
    }
}
