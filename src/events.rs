use serde::Deserialize;

/// A batch of readings published by one device.
///
/// Devices buffer samples between deep-sleep cycles and publish them together,
/// so every reading carries its offset relative to the moment of publishing
/// rather than an absolute time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchEvent {
    pub client: String,
    pub data: Vec<Reading>,
}

/// One measurement within a batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reading {
    /// measure name, e.g. `VBAT` or a sensor address
    pub id: String,
    pub value: f64,
    /// offset in seconds from invocation time
    pub time: i64,
}

impl BatchEvent {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
