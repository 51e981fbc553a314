use crate::error::OpError;
use crate::event::{GatewayEvent, GatewayResponse};
use crate::handlers;
use crate::routes::Route;
use crate::store::ItemStore;

/// Dispatch one gateway event and always produce a response.
///
/// This is the single error boundary: every `OpError` a handler returns is
/// converted to its status code with an `{ "error": ... }` body here, and
/// validation or internal failures are logged before responding. Not-found
/// outcomes are ordinary responses and are not logged.
pub async fn handle<S: ItemStore>(event: GatewayEvent, store: &S) -> GatewayResponse {
    match dispatch(&event, store).await {
        Ok(response) => response,
        Err(err) => {
            if !matches!(err, OpError::NotFound(_)) {
                tracing::error!("request failed: {}", err);
            }
            GatewayResponse::error(err.status_code(), &err.message())
        }
    }
}

async fn dispatch<S: ItemStore>(
    event: &GatewayEvent,
    store: &S,
) -> Result<GatewayResponse, OpError> {
    match Route::from_key(&event.route_key) {
        Route::DeleteItem => handlers::delete_item(store, path_id(event)?).await,
        Route::GetItem => handlers::find_item(store, path_id(event)?).await,
        Route::ListItems => handlers::find_items(store).await,
        Route::CreateItem => handlers::create_item(store, event.body.as_deref()).await,
        Route::ReplaceItem => {
            handlers::replace_item(store, path_id(event)?, event.body.as_deref()).await
        }
        Route::PatchItem => {
            handlers::patch_item(store, path_id(event)?, event.body.as_deref()).await
        }
        Route::Fallback => handlers::route_not_found(event),
    }
}

fn path_id(event: &GatewayEvent) -> Result<&str, OpError> {
    event
        .path_parameters
        .as_ref()
        .and_then(|params| params.id.as_deref())
        .ok_or_else(|| OpError::internal("path parameter 'id' is missing"))
}
