use aws_sdk_timestreamwrite::types::{Dimension, MeasureValueType, Record};

use crate::events::{BatchEvent, Reading};
use crate::IngestError;

pub const DEVICE_DIMENSION: &str = "Device";

/// Converts every reading of the batch into a Timestream record anchored at
/// `invoked_at_ms` (Unix epoch, milliseconds).
///
/// The output preserves the input order and always has one record per reading.
pub fn to_records(event: &BatchEvent, invoked_at_ms: i64) -> Result<Vec<Record>, IngestError> {
    let device = Dimension::builder()
        .name(DEVICE_DIMENSION)
        .value(&event.client)
        .build()?;

    event
        .data
        .iter()
        .map(|reading| to_record(&device, reading, invoked_at_ms))
        .collect()
}

fn to_record(device: &Dimension, reading: &Reading, invoked_at_ms: i64) -> Result<Record, IngestError> {
    let time = absolute_time_ms(invoked_at_ms, reading.time).ok_or_else(|| {
        IngestError::TimestampOverflow {
            id: reading.id.clone(),
            offset: reading.time,
        }
    })?;

    Ok(Record::builder()
        .dimensions(device.clone())
        .measure_name(&reading.id)
        .measure_value(reading.value.to_string())
        .measure_value_type(MeasureValueType::Double)
        .time(time.to_string())
        .build())
}

fn absolute_time_ms(invoked_at_ms: i64, offset_secs: i64) -> Option<i64> {
    offset_secs
        .checked_mul(1000)
        .and_then(|offset_ms| invoked_at_ms.checked_add(offset_ms))
}
