//! Result record produced by each processing call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form payload attached to a result.
pub type ResultData = Map<String, Value>;

/// Outcome of a single `process` call.
///
/// Serializes as `success`, `message`, `data`, `timestamp`, in that order.
/// `data` is left out of the output entirely when it is absent or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Whether processing succeeded
    pub success: bool,

    /// Human readable summary
    pub message: String,

    /// Per-item details
    #[serde(default, skip_serializing_if = "is_empty_data")]
    pub data: Option<ResultData>,

    /// When the result was produced
    pub timestamp: DateTime<Utc>,
}

impl ProcessResult {
    /// Create a successful result with no data.
    pub fn success(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            timestamp,
        }
    }

    /// Attach data. An empty map is stored as no data.
    pub fn with_data(mut self, data: ResultData) -> Self {
        self.data = if data.is_empty() { None } else { Some(data) };
        self
    }

    /// Look up a single data field.
    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }
}

fn is_empty_data(data: &Option<ResultData>) -> bool {
    data.as_ref().map_or(true, Map::is_empty)
}
