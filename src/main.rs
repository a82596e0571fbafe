use aws_config::BehaviorVersion;
use iot_batch_ingest::config;
use iot_batch_ingest::events::BatchEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    iot_batch_ingest::set_up_logging();

    info!(
        "Initializing {} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = config::Config::load_from_env()?;
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let clients = iot_batch_ingest::AwsClients::new(&aws_config, &config).await?;

    info!(
        database = %config.database_name,
        table = %config.table_name,
        "writing sensor batches to timestream"
    );

    run(service_fn(|request: LambdaEvent<BatchEvent>| {
        iot_batch_ingest::function_handler(&clients, &config, request)
    }))
    .await
}
