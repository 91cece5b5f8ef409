//! Object stream configuration.
//!
//! [`StreamConfig`] controls how [`S3Object`](crate::S3Object) wraps a
//! response body: whether reads feed a [`MetricCollector`](crate::MetricCollector),
//! whether dropping an unfinished stream aborts the request, and whether
//! downloaded content is checked against the object's MD5 `ETag`.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::metrics::REPORT_THRESHOLD_BYTES;

/// Object stream configuration.
///
/// # Examples
///
/// ```
/// use s3sdk_io::config::StreamConfig;
///
/// let config = StreamConfig::default();
/// assert!(!config.collect_metrics);
/// assert!(config.abort_on_drop);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct StreamConfig {
    /// Wrap object content in a throughput-reporting reader.
    #[builder(default = false)]
    pub collect_metrics: bool,

    /// Abort the underlying request when a stream is dropped before end-of-stream.
    #[builder(default = true)]
    pub abort_on_drop: bool,

    /// Bytes accumulated between two throughput reports.
    #[builder(default = REPORT_THRESHOLD_BYTES)]
    pub metrics_report_threshold: u64,

    /// Check whole-object downloads against an `ETag` that is a plain MD5 digest.
    #[builder(default = true)]
    pub validate_content_md5: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            collect_metrics: false,
            abort_on_drop: true,
            metrics_report_threshold: REPORT_THRESHOLD_BYTES,
            validate_content_md5: true,
        }
    }
}

impl StreamConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `S3SDK_COLLECT_METRICS` | `false` |
    /// | `S3SDK_ABORT_ON_DROP` | `true` |
    /// | `S3SDK_METRICS_REPORT_THRESHOLD` | `65536` |
    /// | `S3SDK_VALIDATE_CONTENT_MD5` | `true` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("S3SDK_COLLECT_METRICS") {
            config.collect_metrics = parse_bool(&v);
        }
        if let Some(v) = lookup("S3SDK_ABORT_ON_DROP") {
            config.abort_on_drop = parse_bool(&v);
        }
        if let Some(v) = lookup("S3SDK_METRICS_REPORT_THRESHOLD") {
            if let Ok(n) = v.parse::<u64>() {
                config.metrics_report_threshold = n.max(1);
            }
        }
        if let Some(v) = lookup("S3SDK_VALIDATE_CONTENT_MD5") {
            config.validate_content_md5 = parse_bool(&v);
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = StreamConfig::default();
        assert!(!config.collect_metrics);
        assert!(config.abort_on_drop);
        assert_eq!(config.metrics_report_threshold, REPORT_THRESHOLD_BYTES);
        assert!(config.validate_content_md5);
    }

    #[test]
    fn test_should_read_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("S3SDK_COLLECT_METRICS", "TRUE"),
            ("S3SDK_ABORT_ON_DROP", "0"),
            ("S3SDK_METRICS_REPORT_THRESHOLD", "4096"),
            ("S3SDK_VALIDATE_CONTENT_MD5", "false"),
        ]
        .into_iter()
        .collect();
        let config = StreamConfig::from_lookup(|name| vars.get(name).map(|v| (*v).to_owned()));
        assert!(config.collect_metrics);
        assert!(!config.abort_on_drop);
        assert_eq!(config.metrics_report_threshold, 4096);
        assert!(!config.validate_content_md5);
    }

    #[test]
    fn test_should_ignore_invalid_threshold() {
        let config = StreamConfig::from_lookup(|name| {
            (name == "S3SDK_METRICS_REPORT_THRESHOLD").then(|| "lots".to_owned())
        });
        assert_eq!(config.metrics_report_threshold, REPORT_THRESHOLD_BYTES);
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = StreamConfig::builder()
            .collect_metrics(true)
            .abort_on_drop(false)
            .build();
        assert!(config.collect_metrics);
        assert!(!config.abort_on_drop);
        assert_eq!(config.metrics_report_threshold, REPORT_THRESHOLD_BYTES);
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = StreamConfig::default();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("collectMetrics"));
        assert!(json.contains("abortOnDrop"));
        assert!(json.contains("metricsReportThreshold"));
        assert!(json.contains("validateContentMd5"));
    }

    #[test]
    fn test_should_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool(""));
    }
}
