//! Byte-throughput metrics for object transfers.
//!
//! [`MetricsReader`] sits between a response body and its consumer, timing
//! every read and handing accumulated `(bytes, elapsed)` samples to a
//! [`MetricCollector`]. The library never installs a collector by itself.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use pin_project_lite::pin_project;
use tokio::io::{AsyncRead, ReadBuf};

/// Bytes accumulated before a [`MetricsReader`] reports a sample.
pub const REPORT_THRESHOLD_BYTES: u64 = 64 * 1024;

/// Metrics emitted for S3 transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceMetric {
    /// Bytes per second received from `GetObject` bodies.
    DownloadThroughput,
    /// Bytes received from `GetObject` bodies.
    DownloadByteCount,
    /// Bytes per second sent in upload bodies.
    UploadThroughput,
    /// Bytes sent in upload bodies.
    UploadByteCount,
}

impl ServiceMetric {
    /// Returns the metric name as reported to collectors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DownloadThroughput => "S3DownloadThroughput",
            Self::DownloadByteCount => "S3DownloadByteCount",
            Self::UploadThroughput => "S3UploadThroughput",
            Self::UploadByteCount => "S3UploadByteCount",
        }
    }

    /// The byte-count metric paired with a throughput metric.
    #[must_use]
    pub const fn byte_count(&self) -> Self {
        match self {
            Self::DownloadThroughput | Self::DownloadByteCount => Self::DownloadByteCount,
            Self::UploadThroughput | Self::UploadByteCount => Self::UploadByteCount,
        }
    }
}

impl fmt::Display for ServiceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monotonically increasing numeric value.
#[derive(Debug, Clone, Default)]
pub struct IncreasingCounter {
    value: Arc<AtomicU64>,
}

impl IncreasingCounter {
    /// Create a new counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter by the given amount and return the new value,
    /// wrapping at `u64::MAX`.
    pub fn increment(&self, amount: u64) -> u64 {
        self.value
            .fetch_add(amount, Ordering::Relaxed)
            .wrapping_add(amount)
    }

    /// Get the current value of the counter.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Receives throughput samples from instrumented readers.
pub trait MetricCollector: Send + Sync + fmt::Debug {
    /// Record that `bytes` were transferred over `elapsed`.
    fn collect_byte_throughput(&self, metric: ServiceMetric, bytes: u64, elapsed: Duration);
}

/// Running totals for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThroughputTotals {
    /// Bytes reported.
    pub bytes: u64,
    /// Time spent transferring those bytes.
    pub elapsed: Duration,
    /// Number of samples received.
    pub samples: u64,
}

impl ThroughputTotals {
    /// Average throughput in bytes per second, `None` before any time was measured.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bytes_per_second(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        (secs > 0.0).then(|| self.bytes as f64 / secs)
    }
}

/// A collector that keeps totals in memory.
#[derive(Debug, Default)]
pub struct InMemoryMetricCollector {
    totals: Mutex<HashMap<ServiceMetric, ThroughputTotals>>,
    total_bytes: IncreasingCounter,
}

impl InMemoryMetricCollector {
    /// Create a collector with no recorded samples.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals recorded for `metric`, `None` if it never reported.
    #[must_use]
    pub fn totals(&self, metric: ServiceMetric) -> Option<ThroughputTotals> {
        self.totals.lock().get(&metric).copied()
    }

    /// Bytes recorded for `metric` or its paired byte-count metric.
    #[must_use]
    pub fn bytes(&self, metric: ServiceMetric) -> u64 {
        self.totals(metric.byte_count()).map_or(0, |t| t.bytes)
    }

    /// Average bytes per second recorded for `metric`.
    #[must_use]
    pub fn throughput(&self, metric: ServiceMetric) -> Option<f64> {
        self.totals(metric)
            .and_then(|t| t.bytes_per_second())
    }

    /// Bytes recorded across every metric.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes.value()
    }
}

impl MetricCollector for InMemoryMetricCollector {
    fn collect_byte_throughput(&self, metric: ServiceMetric, bytes: u64, elapsed: Duration) {
        let mut totals = self.totals.lock();
        let entry = totals.entry(metric).or_default();
        entry.bytes += bytes;
        entry.elapsed += elapsed;
        entry.samples += 1;
        if metric.byte_count() != metric {
            let counted = totals.entry(metric.byte_count()).or_default();
            counted.bytes += bytes;
            counted.samples += 1;
        }
        drop(totals);
        self.total_bytes.increment(bytes);
    }
}

pin_project! {
    /// An [`AsyncRead`] decorator that reports read throughput.
    ///
    /// Time is measured from the first poll of a read until it completes, so
    /// time spent waiting on the network counts toward the sample. Samples are
    /// flushed once `threshold` bytes have accumulated, at end-of-stream, and
    /// when the reader is dropped.
    pub struct MetricsReader<R> {
        #[pin]
        inner: R,
        reporter: Reporter,
        read_started: Option<Instant>,
        total: IncreasingCounter,
    }
}

struct Reporter {
    collector: Arc<dyn MetricCollector>,
    metric: ServiceMetric,
    threshold: u64,
    pending_bytes: u64,
    pending_elapsed: Duration,
}

impl Reporter {
    fn record(&mut self, bytes: u64, elapsed: Duration) {
        self.pending_bytes += bytes;
        self.pending_elapsed += elapsed;
    }

    fn flush(&mut self) {
        if self.pending_bytes == 0 {
            return;
        }
        tracing::trace!(
            metric = %self.metric,
            bytes = self.pending_bytes,
            elapsed_us = u64::try_from(self.pending_elapsed.as_micros()).unwrap_or(u64::MAX),
            "reporting byte throughput"
        );
        self.collector
            .collect_byte_throughput(self.metric, self.pending_bytes, self.pending_elapsed);
        self.pending_bytes = 0;
        self.pending_elapsed = Duration::ZERO;
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        self.flush();
    }
}

impl<R> MetricsReader<R> {
    /// Report download throughput for `inner` to `collector`.
    pub fn new(inner: R, collector: Arc<dyn MetricCollector>) -> Self {
        Self::with_metric(inner, collector, ServiceMetric::DownloadThroughput)
    }

    /// Report throughput for `inner` under `metric`.
    pub fn with_metric(inner: R, collector: Arc<dyn MetricCollector>, metric: ServiceMetric) -> Self {
        Self {
            inner,
            reporter: Reporter {
                collector,
                metric,
                threshold: REPORT_THRESHOLD_BYTES,
                pending_bytes: 0,
                pending_elapsed: Duration::ZERO,
            },
            read_started: None,
            total: IncreasingCounter::new(),
        }
    }

    /// Override the bytes accumulated between two reports. Zero is treated as one.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.reporter.threshold = threshold.max(1);
        self
    }

    /// Bytes read through this reader so far.
    #[must_use]
    pub fn bytes_read(&self) -> u64 {
        self.total.value()
    }

    /// The wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Flush any pending sample and return the wrapped reader.
    pub fn into_inner(self) -> R {
        let Self {
            inner, mut reporter, ..
        } = self;
        reporter.flush();
        inner
    }
}

impl<R> fmt::Debug for MetricsReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsReader")
            .field("metric", &self.reporter.metric)
            .field("threshold", &self.reporter.threshold)
            .field("bytes_read", &self.total.value())
            .finish_non_exhaustive()
    }
}

impl<R: AsyncRead> AsyncRead for MetricsReader<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.project();
        let started = *this.read_started.get_or_insert_with(Instant::now);
        let before = buf.filled().len();

        let poll = this.inner.poll_read(cx, buf);
        if let Poll::Ready(result) = &poll {
            *this.read_started = None;
            if result.is_ok() {
                let n = u64::try_from(buf.filled().len() - before).unwrap_or(u64::MAX);
                this.total.increment(n);
                this.reporter.record(n, started.elapsed());
                if n == 0 || this.reporter.pending_bytes >= this.reporter.threshold {
                    this.reporter.flush();
                }
            }
        }
        poll
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncReadExt;
    use tokio_test::io::Builder;

    use super::*;

    #[test]
    fn test_should_name_metrics() {
        assert_eq!(ServiceMetric::DownloadThroughput.as_str(), "S3DownloadThroughput");
        assert_eq!(ServiceMetric::UploadByteCount.to_string(), "S3UploadByteCount");
        assert_eq!(
            ServiceMetric::UploadThroughput.byte_count(),
            ServiceMetric::UploadByteCount
        );
    }

    #[test]
    fn test_should_share_counter_between_clones() {
        let counter = IncreasingCounter::new();
        let clone = counter.clone();
        assert_eq!(counter.increment(5), 5);
        assert_eq!(clone.increment(3), 8);
        assert_eq!(counter.value(), 8);
    }

    #[test]
    fn test_should_wrap_counter_at_max() {
        let counter = IncreasingCounter::new();
        counter.increment(u64::MAX);
        assert_eq!(counter.increment(2), 1);
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_should_accumulate_collector_totals() {
        let collector = InMemoryMetricCollector::new();
        collector.collect_byte_throughput(
            ServiceMetric::DownloadThroughput,
            1000,
            Duration::from_millis(500),
        );
        collector.collect_byte_throughput(
            ServiceMetric::DownloadThroughput,
            1000,
            Duration::from_millis(500),
        );

        let totals = collector.totals(ServiceMetric::DownloadThroughput);
        assert_eq!(totals.map(|t| t.samples), Some(2));
        assert_eq!(collector.bytes(ServiceMetric::DownloadThroughput), 2000);
        assert_eq!(collector.bytes(ServiceMetric::DownloadByteCount), 2000);
        assert_eq!(collector.throughput(ServiceMetric::DownloadThroughput), Some(2000.0));
        assert_eq!(collector.total_bytes(), 2000);
        assert!(collector.totals(ServiceMetric::UploadThroughput).is_none());
    }

    #[test]
    fn test_should_not_report_throughput_without_elapsed_time() {
        let totals = ThroughputTotals {
            bytes: 10,
            ..ThroughputTotals::default()
        };
        assert_eq!(totals.bytes_per_second(), None);
    }

    #[tokio::test]
    async fn test_should_report_bytes_at_end_of_stream() {
        let collector = Arc::new(InMemoryMetricCollector::new());
        let mock = Builder::new().read(b"hello ").read(b"world").build();
        let mut reader = MetricsReader::new(mock, collector.clone());

        let mut out = Vec::new();
        reader.read_to_end(&mut out).await.expect("read body");

        assert_eq!(out, b"hello world");
        assert_eq!(reader.bytes_read(), 11);
        assert_eq!(collector.bytes(ServiceMetric::DownloadThroughput), 11);
    }

    #[tokio::test]
    async fn test_should_report_each_time_threshold_is_crossed() {
        let collector = Arc::new(InMemoryMetricCollector::new());
        let mock = Builder::new().read(b"abcd").read(b"efgh").read(b"ij").build();
        let mut reader = MetricsReader::new(mock, collector.clone()).with_threshold(4);

        let mut out = Vec::new();
        reader.read_to_end(&mut out).await.expect("read body");

        let totals = collector.totals(ServiceMetric::DownloadThroughput);
        assert_eq!(totals.map(|t| t.bytes), Some(10));
        // Two full-threshold reports plus the tail flushed at end-of-stream.
        assert_eq!(totals.map(|t| t.samples), Some(3));
    }

    #[tokio::test]
    async fn test_should_flush_pending_bytes_on_drop() {
        let collector = Arc::new(InMemoryMetricCollector::new());
        let mock = Builder::new().read(b"partial").build();
        let mut reader = MetricsReader::new(mock, collector.clone());

        let mut buf = [0_u8; 7];
        reader.read_exact(&mut buf).await.expect("read prefix");
        assert_eq!(collector.total_bytes(), 0);

        drop(reader);
        assert_eq!(collector.total_bytes(), 7);
    }
}
