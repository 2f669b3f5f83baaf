//! Configuration
//!
//! Aggregator settings and JSON persistence for configuration artifacts and
//! reference tables.
use crate::constants::DISTANCE_SUFFIX;
use crate::data::DescriptorTable;
use crate::errors::MetricsError;
use crate::metrics::ColumnInfo;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_parallel() -> bool {
    true
}
fn default_num_threads() -> Option<usize> {
    None
}
fn default_distance_suffix() -> String {
    DISTANCE_SUFFIX.to_string()
}

/// Configuration for the `BatchDescriptorAggregator`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Compute feature distances on the rayon thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Number of threads for a dedicated pool. Uses the global pool when `None`.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
    /// Suffix appended to feature column names in the distance output.
    #[serde(default = "default_distance_suffix")]
    pub distance_suffix: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        AggregatorConfig {
            parallel: true,
            num_threads: None,
            distance_suffix: DISTANCE_SUFFIX.to_string(),
        }
    }
}

/// IO
pub trait MetricsIO: Serialize + DeserializeOwned + Sized {
    /// Save an object as json to a file.
    ///
    /// * `path` - Path to save to.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MetricsError> {
        fs::write(path, self.json_dump()?).map_err(|e| MetricsError::UnableToWrite(e.to_string()))
    }

    /// Dump an object as a json string.
    fn json_dump(&self) -> Result<String, MetricsError> {
        serde_json::to_string(self).map_err(|e| MetricsError::UnableToWrite(e.to_string()))
    }

    /// Load an object from a json string.
    ///
    /// * `json_str` - String object, which can be deserialized from json.
    fn from_json(json_str: &str) -> Result<Self, MetricsError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| MetricsError::UnableToRead(e.to_string()))
    }

    /// Load an object from a path to a json file.
    ///
    /// * `path` - Path to load from.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, MetricsError> {
        let json_str = fs::read_to_string(path).map_err(|e| MetricsError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl MetricsIO for AggregatorConfig {}
impl MetricsIO for ColumnInfo {}
impl MetricsIO for DescriptorTable {}
