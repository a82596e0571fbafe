use aws_sdk_timestreamwrite::operation::write_records::{WriteRecordsError, WriteRecordsOutput};
use aws_sdk_timestreamwrite::operation::RequestId;
use aws_sdk_timestreamwrite::types::Record;
use aws_sdk_timestreamwrite::Client;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::IngestError;

/// Write acknowledgment returned to the invoker, shaped like the service's
/// WriteRecords response.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IngestResponse {
    pub records_ingested: RecordsIngested,
    pub request_ids: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordsIngested {
    pub total: i32,
    pub memory_store: i32,
    pub magnetic_store: i32,
}

impl IngestResponse {
    fn add(&mut self, output: &WriteRecordsOutput) {
        if let Some(ingested) = output.records_ingested() {
            self.records_ingested.total += ingested.total();
            self.records_ingested.memory_store += ingested.memory_store();
            self.records_ingested.magnetic_store += ingested.magnetic_store();
        }
        if let Some(request_id) = output.request_id() {
            self.request_ids.push(request_id.to_string());
        }
    }
}

/// Writes `records` to the configured table, at most `config.records_per_write`
/// per request. Requests go out one after another and the first failure aborts
/// the remaining ones. An empty batch is an error, the service rejects it too.
pub async fn write_records(
    client: &Client,
    config: &Config,
    records: Vec<Record>,
) -> Result<IngestResponse, IngestError> {
    let number_of_records = records.len();
    if number_of_records == 0 {
        return Err(IngestError::EmptyBatch {
            database: config.database_name.clone(),
            table: config.table_name.clone(),
        });
    }

    let mut response = IngestResponse::default();

    let chunk_size = config.records_per_write.max(1);
    let number_of_writes = number_of_records.div_ceil(chunk_size);
    info!(
        "Will write {} records to {}.{} in {} requests",
        number_of_records, config.database_name, config.table_name, number_of_writes
    );

    for chunk in records.chunks(chunk_size) {
        let output = send_chunk(client, config, chunk).await?;
        response.add(&output);
    }

    debug!("write acknowledgment: {:?}", response);
    Ok(response)
}

async fn send_chunk(
    client: &Client,
    config: &Config,
    chunk: &[Record],
) -> Result<WriteRecordsOutput, IngestError> {
    let start = Instant::now();
    let result = client
        .write_records()
        .database_name(&config.database_name)
        .table_name(&config.table_name)
        .set_records(Some(chunk.to_vec()))
        .send()
        .await;

    match result {
        Ok(output) => {
            info!(
                records = chunk.len(),
                elapsed_ms = start.elapsed().as_millis(),
                "timestream write completed"
            );
            Ok(output)
        }
        Err(error) => {
            let error = error.into_service_error();
            log_rejected_records(&error);
            Err(IngestError::Write {
                database: config.database_name.clone(),
                table: config.table_name.clone(),
                count: chunk.len(),
                error,
            })
        }
    }
}

fn log_rejected_records(error: &WriteRecordsError) {
    if let WriteRecordsError::RejectedRecordsException(rejected) = error {
        for record in rejected.rejected_records() {
            warn!(
                record_index = record.record_index(),
                reason = record.reason().unwrap_or_default(),
                existing_version = ?record.existing_version(),
                "record rejected by timestream"
            );
        }
    }
}
