use std::fmt;

use crate::event::status;

/// Outcome kind for a failed operation.
///
/// Each handler returns one of these instead of raising; the router boundary
/// maps the kind to a status code and an `{ "error": ... }` body. Internal
/// errors (malformed input, storage failures) deliberately map to 400 rather
/// than 500, matching the service's established contract.
#[derive(Debug)]
pub enum OpError {
    /// No matching record or route; recovered as a 404 response.
    NotFound(String),
    /// A required field was missing or empty; recovered as a 400 response.
    Validation(String),
    /// Anything else: parse failures, storage errors. Also a 400 response.
    Internal(anyhow::Error),
}

impl OpError {
    /// The canonical missing-item error for get/replace/patch.
    pub fn item_not_found() -> Self {
        Self::NotFound("item not found".to_string())
    }

    pub fn internal(message: &str) -> Self {
        Self::Internal(anyhow::anyhow!("{message}"))
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => status::NOT_FOUND,
            Self::Validation(_) | Self::Internal(_) => status::BAD_REQUEST,
        }
    }

    /// The message placed in the response's `error` field.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound(message) | Self::Validation(message) => message.clone(),
            Self::Internal(err) => err.to_string(),
        }
    }
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<anyhow::Error> for OpError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<serde_json::Error> for OpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.into())
    }
}
