use crate::error::OpError;
use crate::event::{GatewayEvent, GatewayResponse};

/// `$default` catch-all - No exposed route matched the request
///
/// The message quotes the method and path exactly as the gateway saw them.
pub fn route_not_found(event: &GatewayEvent) -> Result<GatewayResponse, OpError> {
    let http = &event
        .request_context
        .as_ref()
        .ok_or_else(|| OpError::internal("request context is missing"))?
        .http;

    Err(OpError::NotFound(format!(
        "route '{} {}' not found",
        http.method, http.path
    )))
}
