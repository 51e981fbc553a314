use serde::{Deserialize, Serialize};

/// Status codes used by the API
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const NO_CONTENT: u16 = 204;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
}

/// Inbound gateway event, reduced to the fields the service consumes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    pub route_key: String,
    #[serde(default)]
    pub path_parameters: Option<PathParameters>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Deserialize)]
pub struct PathParameters {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RequestContext {
    pub http: HttpDescription,
}

/// Method and raw path of the request, used only by the catch-all route.
#[derive(Debug, Deserialize)]
pub struct HttpDescription {
    pub method: String,
    pub path: String,
}

/// Response envelope serialized back to the gateway.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub headers: ResponseHeaders,
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: &'static str,
}

impl GatewayResponse {
    /// Build a response with a JSON-serialized body.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            headers: ResponseHeaders::json(),
            status_code,
            body: serde_json::to_string(body)?,
        })
    }

    /// Build an `{ "error": ... }` response. Infallible so the router's
    /// error boundary can always produce a response.
    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            headers: ResponseHeaders::json(),
            status_code,
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }
}

impl ResponseHeaders {
    fn json() -> Self {
        Self {
            content_type: "application/json",
        }
    }
}
