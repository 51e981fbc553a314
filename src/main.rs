mod config;
mod error;
mod event;
mod handlers;
mod models;
mod router;
mod routes;
mod store;
mod validate;

use config::Config;
use event::GatewayEvent;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use store::DynamoStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-dynamo-items starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = DynamoStore::from_config(&config).await;
    let store_ref = &store;

    run(service_fn(move |event: LambdaEvent<GatewayEvent>| async move {
        Ok::<_, Error>(router::handle(event.payload, store_ref).await)
    }))
    .await
}
