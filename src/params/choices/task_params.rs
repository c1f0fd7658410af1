use crate::core::FilterConfig;
use crate::params::choices::StreamChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_sample_frequency() -> u64 {
    1_000
}

fn default_skip_records() -> usize {
    0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnomalyLogParameters {
    #[schemars(
        with = "String",
        title = "Log Path",
        description = "File that receives one record per rejected observation",
        extend("format" = "path", "x-file" = true)
    )]
    pub path: PathBuf,

    #[serde(default = "default_skip_records")]
    #[schemars(
        title = "Skip Records",
        description = "Leading records dropped when ranking the log",
        default = "default_skip_records"
    )]
    pub skip_records: usize,
}

/// Everything needed to run one filter task from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskParams {
    pub filter: FilterConfig,

    pub stream: StreamChoice,

    #[serde(default)]
    #[schemars(
        title = "Max Instances",
        description = "Stop after this many observations (None = unlimited)"
    )]
    pub max_instances: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Max Seconds",
        description = "Stop after this many seconds (None = unlimited)"
    )]
    pub max_seconds: Option<u64>,

    #[serde(default = "default_sample_frequency")]
    #[schemars(
        title = "Sample Frequency",
        description = "Record a snapshot every N observations",
        range(min = 1),
        default = "default_sample_frequency"
    )]
    pub sample_frequency: u64,

    #[serde(default)]
    #[schemars(title = "Anomaly Log", description = "Where rejections are appended")]
    pub anomaly_log: Option<AnomalyLogParameters>,
}

/// JSON schema of [`TaskParams`].
pub fn task_schema() -> Schema {
    schema_for!(TaskParams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_minimal_task() {
        let p: TaskParams = serde_json::from_value(json!({
            "filter": { "timesteps": 3, "features": 1 },
            "stream": {
                "type": "gaussian-generator",
                "params": { "means": [1.0], "std_devs": [0.5], "max_instances": 10 }
            }
        }))
        .unwrap();
        assert_eq!(p.sample_frequency, 1_000);
        assert_eq!(p.filter.tolerance, 0.1);
        assert!(p.anomaly_log.is_none());
        assert!(p.max_instances.is_none());
    }

    #[test]
    fn schema_lists_top_level_fields() {
        let schema = serde_json::to_value(task_schema()).unwrap();
        let props = schema["properties"].as_object().unwrap();
        for key in ["filter", "stream", "sample_frequency", "anomaly_log"] {
            assert!(props.contains_key(key), "missing {key}");
        }
    }
}
