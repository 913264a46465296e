//! Processor statistics snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Point-in-time view of a processor's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorStats {
    /// Number of successful `process` calls so far
    pub processed_count: u64,

    /// Whether verbose diagnostics are enabled
    pub verbose: bool,
}

impl ProcessorStats {
    /// Mapping form, keyed `processed_count` and `verbose`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("processed_count".to_string(), Value::from(self.processed_count));
        map.insert("verbose".to_string(), Value::from(self.verbose));
        map
    }
}
