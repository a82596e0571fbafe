use aws_sdk_timestreamwrite::error::BuildError;
use aws_sdk_timestreamwrite::operation::write_records::WriteRecordsError;
use lambda_runtime::{Error, LambdaEvent};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use crate::clients::AwsClients;
use crate::config::Config;
use crate::events::BatchEvent;
use crate::process::IngestResponse;

pub mod clients;
pub mod config;
pub mod events;
pub mod process;
pub mod records;

#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("reading {id} has a time offset of {offset}s which does not fit a millisecond timestamp")]
    TimestampOverflow { id: String, offset: i64 },
    #[error("no records to write to {database}.{table}")]
    EmptyBatch { database: String, table: String },
    #[error("failed to build record dimension: {0}")]
    Dimension(#[from] BuildError),
    #[error("failed to write {count} records to {database}.{table}: {error}")]
    Write {
        database: String,
        table: String,
        count: usize,
        error: WriteRecordsError,
    },
}

pub fn set_up_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();
}

// lambda handler
pub async fn function_handler(
    clients: &AwsClients,
    config: &Config,
    evt: LambdaEvent<BatchEvent>,
) -> Result<IngestResponse, Error> {
    info!("Handling lambda invocation");
    debug!("Handling event payload: {:?}", evt.payload);

    let invoked_at_ms = chrono::Utc::now().timestamp_millis();
    let response = ingest(clients, config, &evt.payload, invoked_at_ms).await?;
    Ok(response)
}

/// Transforms the batch into records anchored at `invoked_at_ms` and writes them.
pub async fn ingest(
    clients: &AwsClients,
    config: &Config,
    event: &BatchEvent,
    invoked_at_ms: i64,
) -> Result<IngestResponse, IngestError> {
    info!(
        device = %event.client,
        readings = event.len(),
        "ingesting sensor batch"
    );

    let records = records::to_records(event, invoked_at_ms)?;
    process::write_records(&clients.timestream, config, records).await
}
