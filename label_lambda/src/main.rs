use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, tracing, Error};
mod error;
mod event_handler;
#[cfg(test)]
mod fixtures;
mod labels;
mod source_object;
use event_handler::{function_handler, Clients};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt().json().init();
    let shared_config = aws_config::load_defaults(BehaviorVersion::v2025_01_17()).await;
    let clients = Clients::new(&shared_config);
    run(service_fn(|event| function_handler(event, &clients))).await
}
