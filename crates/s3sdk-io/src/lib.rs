//! Streaming I/O for S3 object content.
//!
//! [`S3Object`] pairs the metadata of a `GetObject` result with an
//! [`S3ObjectStream`], an `AsyncRead` body that aborts its exchange when
//! released before end-of-stream. With [`StreamConfig::collect_metrics`]
//! set, reads also pass through a [`MetricsReader`] that reports download
//! throughput to a [`MetricCollector`].

pub mod config;
pub mod metrics;
pub mod object;
pub mod stream;

pub use config::StreamConfig;
pub use metrics::{
    InMemoryMetricCollector, IncreasingCounter, MetricCollector, MetricsReader, ServiceMetric,
    ThroughputTotals,
};
pub use object::{ObjectContent, S3Object};
pub use stream::S3ObjectStream;
