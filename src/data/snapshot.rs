//! Wire types for the query endpoint response.
//!
//! These types match the JSON format returned by a Prometheus-compatible
//! instant query endpoint (`/api/v1/query`). They serve as the common data
//! format between the backend producer and this viewer consumer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label carrying the series name in a sample's label set.
pub const NAME_LABEL: &str = "__name__";

/// Label carrying the origin host/process of a sample.
pub const INSTANCE_LABEL: &str = "instance";

/// A complete snapshot of samples from one query execution.
///
/// Ordering is whatever the backend returned; it is not contractually
/// meaningful and is never sorted or stabilized here.
pub type MetricSnapshot = Vec<MetricSample>;

/// One data point returned by the backend for a time series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSample {
    /// Label set identifying the series, keyed by label name.
    /// Includes the distinguished `__name__` and `instance` labels when the
    /// backend supplies them.
    #[serde(default)]
    pub metric: BTreeMap<String, String>,

    /// The `[timestamp, value]` pair. The value is a decimal number encoded
    /// as text and is displayed exactly as received.
    pub value: (f64, String),
}

impl MetricSample {
    /// Series name from the `__name__` label, or empty if absent.
    pub fn name(&self) -> &str {
        self.metric.get(NAME_LABEL).map(String::as_str).unwrap_or("")
    }

    /// Origin host/process from the `instance` label, or empty if absent.
    pub fn instance(&self) -> &str {
        self.metric.get(INSTANCE_LABEL).map(String::as_str).unwrap_or("")
    }

    /// Sample timestamp (seconds since the epoch, fractional).
    pub fn timestamp(&self) -> f64 {
        self.value.0
    }

    /// The value text, verbatim from the wire.
    pub fn value_text(&self) -> &str {
        &self.value.1
    }
}

/// Top-level query response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// "success" or "error". The viewer does not branch on this; a body
    /// without `data.result` fails to parse regardless.
    #[serde(default)]
    pub status: String,
    pub data: QueryData,
}

/// The `data` object of a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryData {
    #[serde(rename = "resultType", default)]
    pub result_type: String,
    /// The ordered sequence of samples. Required: its absence is a parse
    /// error and the poll that received it fails.
    pub result: MetricSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_response() {
        let json = r#"{
            "status": "success",
            "data": {
                "resultType": "vector",
                "result": [
                    {
                        "metric": {
                            "__name__": "bigip_cpu_usage",
                            "instance": "host1",
                            "job": "bigip"
                        },
                        "value": [1700000000, "42.5"]
                    }
                ]
            }
        }"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.data.result_type, "vector");
        assert_eq!(response.data.result.len(), 1);

        let sample = &response.data.result[0];
        assert_eq!(sample.name(), "bigip_cpu_usage");
        assert_eq!(sample.instance(), "host1");
        assert_eq!(sample.timestamp(), 1700000000.0);
        assert_eq!(sample.value_text(), "42.5");
    }

    #[test]
    fn test_deserialize_empty_result() {
        let json = r#"{"status": "success", "data": {"result": []}}"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.result.is_empty());
    }

    #[test]
    fn test_missing_labels_yield_empty_text() {
        let json = r#"{"metric": {}, "value": [1700000000, "0.1"]}"#;

        let sample: MetricSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.name(), "");
        assert_eq!(sample.instance(), "");
        assert_eq!(sample.value_text(), "0.1");
    }

    #[test]
    fn test_missing_result_is_a_parse_error() {
        let json = r#"{"status": "success", "data": {}}"#;
        assert!(serde_json::from_str::<QueryResponse>(json).is_err());
    }

    #[test]
    fn test_missing_value_is_a_parse_error() {
        let json = r#"{"metric": {"__name__": "x"}}"#;
        assert!(serde_json::from_str::<MetricSample>(json).is_err());
    }

    #[test]
    fn test_snapshot_order_is_preserved() {
        let json = r#"{
            "status": "success",
            "data": {
                "result": [
                    {"metric": {"instance": "b"}, "value": [0, "2"]},
                    {"metric": {"instance": "a"}, "value": [0, "1"]}
                ]
            }
        }"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let instances: Vec<&str> =
            response.data.result.iter().map(|s| s.instance()).collect();
        assert_eq!(instances, vec!["b", "a"]);
    }
}
