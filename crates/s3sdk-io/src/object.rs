//! A downloaded object: its metadata plus a content stream.

use std::io::Cursor;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use s3sdk_model::result::GetObjectResult;
use s3sdk_model::types::{RequestCharged, ServerSideEncryption};
use s3sdk_model::{Error, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::StreamConfig;
use crate::metrics::{MetricCollector, MetricsReader};
use crate::stream::S3ObjectStream;

/// The content stream type held by an [`S3Object`].
pub type ObjectContent = S3ObjectStream<Pin<Box<dyn AsyncRead + Send>>>;

/// An object stored in S3.
#[derive(Debug, Default)]
pub struct S3Object {
    bucket_name: String,
    key: String,
    metadata: GetObjectResult,
    content: Option<ObjectContent>,
}

impl S3Object {
    /// An object with no metadata and no content stream.
    pub fn new(bucket_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            key: key.into(),
            ..Self::default()
        }
    }

    /// Build an object from a `GetObject` result.
    ///
    /// The body moves into the content stream, whose expected length is the
    /// result's `content_length`. With `collect_metrics` set and a collector
    /// provided, reads report download throughput. With
    /// `validate_content_md5` set, a whole-object download whose `ETag` is a
    /// plain MD5 digest is checked against it at end-of-stream.
    pub fn from_get_object(
        bucket_name: impl Into<String>,
        key: impl Into<String>,
        mut result: GetObjectResult,
        config: &StreamConfig,
        collector: Option<Arc<dyn MetricCollector>>,
    ) -> Self {
        let data = result.body.take().map(|b| b.into_bytes()).unwrap_or_default();
        let reader: Pin<Box<dyn AsyncRead + Send>> = match collector {
            Some(collector) if config.collect_metrics => Box::pin(
                MetricsReader::new(Cursor::new(data), collector)
                    .with_threshold(config.metrics_report_threshold),
            ),
            _ => Box::pin(Cursor::new(data)),
        };

        let mut content = S3ObjectStream::new(reader).with_abort_on_drop(config.abort_on_drop);
        if let Some(len) = result.content_length.and_then(|len| u64::try_from(len).ok()) {
            content = content.with_expected_length(len);
        }
        if config.validate_content_md5 {
            if let Some(digest) = content_md5(&result) {
                content = content.with_expected_md5(digest);
            }
        }

        Self {
            bucket_name: bucket_name.into(),
            key: key.into(),
            metadata: result,
            content: Some(content),
        }
    }

    /// Attach a content stream built by the transport.
    ///
    /// The stream is stored as given. It is not wrapped in a second
    /// [`MetricsReader`], so a transport that already meters its body is
    /// not counted twice.
    #[must_use]
    pub fn with_content(mut self, content: ObjectContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Replace the metadata. Any body left in `metadata` is discarded.
    #[must_use]
    pub fn with_metadata(mut self, mut metadata: GetObjectResult) -> Self {
        metadata.body = None;
        self.metadata = metadata;
        self
    }

    /// Name of the bucket holding the object.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Key the object is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Response metadata, without the body.
    #[must_use]
    pub fn metadata(&self) -> &GetObjectResult {
        &self.metadata
    }

    /// The content stream, if the object still has one.
    #[must_use]
    pub fn content(&self) -> Option<&ObjectContent> {
        self.content.as_ref()
    }

    /// Mutable access to the content stream for reading.
    pub fn content_mut(&mut self) -> Option<&mut ObjectContent> {
        self.content.as_mut()
    }

    /// Detach the content stream, leaving the object without one.
    pub fn take_content(&mut self) -> Option<ObjectContent> {
        self.content.take()
    }

    /// Whether the requester was charged for this download.
    #[must_use]
    pub fn requester_charged(&self) -> bool {
        self.metadata.request_charged == Some(RequestCharged::Requester)
    }

    /// The website redirect location stored with the object.
    #[must_use]
    pub fn redirect_location(&self) -> Option<&str> {
        self.metadata.website_redirect_location()
    }

    /// Read the remaining content into memory.
    ///
    /// Returns an empty buffer when the object has no content stream. An
    /// aborted stream surfaces as [`Error::Aborted`].
    pub async fn read_all(&mut self) -> Result<Bytes> {
        let Some(mut content) = self.content.take() else {
            return Ok(Bytes::new());
        };

        let capacity = content
            .expected_length()
            .and_then(|len| usize::try_from(len.saturating_sub(content.bytes_read())).ok())
            .unwrap_or_default();
        let mut data = Vec::with_capacity(capacity);
        match content.read_to_end(&mut data).await {
            Ok(_) => {
                content.close();
                Ok(Bytes::from(data))
            }
            Err(err) if err.kind() == std::io::ErrorKind::ConnectionAborted => Err(Error::Aborted),
            Err(err) => {
                content.abort();
                Err(Error::Io(err))
            }
        }
    }

    /// Close the content stream, aborting the request if it was not fully read.
    pub fn close(mut self) {
        if let Some(content) = self.content.take() {
            content.close();
        }
    }
}

/// The MD5 digest a download must match, when its `ETag` is one.
///
/// Multipart `ETag`s, ranged downloads and objects encrypted with SSE-C or
/// SSE-KMS carry an `ETag` that is not the MD5 of the returned bytes.
fn content_md5(result: &GetObjectResult) -> Option<[u8; 16]> {
    if result.content_range.is_some()
        || result.sse_customer_algorithm.is_some()
        || matches!(
            result.server_side_encryption,
            Some(ServerSideEncryption::AwsKms | ServerSideEncryption::AwsKmsDsse)
        )
    {
        return None;
    }

    let etag = result.e_tag.as_deref()?.trim_matches('"');
    if etag.contains('-') {
        return None;
    }
    let digest = hex::decode(etag).ok()?;
    <[u8; 16]>::try_from(digest).ok()
}

#[cfg(test)]
mod tests {
    use futures::future::AbortHandle;
    use md5::{Digest, Md5};
    use s3sdk_model::StreamingBlob;
    use tokio_test::io::Builder;

    use super::*;
    use crate::metrics::{InMemoryMetricCollector, ServiceMetric};

    fn get_object_result(body: &'static [u8]) -> GetObjectResult {
        GetObjectResult::default()
            .with_body(StreamingBlob::from(body))
            .with_content_length(i64::try_from(body.len()).unwrap_or_default())
            .with_content_type("text/plain")
            .with_e_tag("\"etag\"")
    }

    #[tokio::test]
    async fn test_should_move_body_into_content_stream() {
        let object = S3Object::from_get_object(
            "bucket",
            "notes.txt",
            get_object_result(b"hello"),
            &StreamConfig::default(),
            None,
        );

        assert_eq!(object.bucket_name(), "bucket");
        assert_eq!(object.key(), "notes.txt");
        assert!(object.metadata().body().is_none());
        assert_eq!(object.metadata().e_tag(), Some("\"etag\""));
        assert_eq!(object.content().and_then(S3ObjectStream::expected_length), Some(5));
        object.close();
    }

    #[tokio::test]
    async fn test_should_read_all_content() {
        let mut object = S3Object::from_get_object(
            "bucket",
            "notes.txt",
            get_object_result(b"hello world"),
            &StreamConfig::default(),
            None,
        );
        let data = object.read_all().await.expect("read content");
        assert_eq!(&data[..], b"hello world");
        assert!(object.content().is_none());
    }

    #[tokio::test]
    async fn test_should_report_metrics_when_enabled() {
        let collector = Arc::new(InMemoryMetricCollector::new());
        let config = StreamConfig::builder().collect_metrics(true).build();
        let mut object = S3Object::from_get_object(
            "bucket",
            "big.bin",
            get_object_result(b"0123456789"),
            &config,
            Some(collector.clone() as Arc<dyn MetricCollector>),
        );

        object.read_all().await.expect("read content");
        assert_eq!(collector.bytes(ServiceMetric::DownloadThroughput), 10);
    }

    #[tokio::test]
    async fn test_should_skip_metrics_when_disabled() {
        let collector = Arc::new(InMemoryMetricCollector::new());
        let mut object = S3Object::from_get_object(
            "bucket",
            "big.bin",
            get_object_result(b"0123456789"),
            &StreamConfig::default(),
            Some(collector.clone() as Arc<dyn MetricCollector>),
        );

        object.read_all().await.expect("read content");
        assert_eq!(collector.total_bytes(), 0);
    }

    #[tokio::test]
    async fn test_should_surface_abort_as_error() {
        let (handle, _registration) = AbortHandle::new_pair();
        let reader: Pin<Box<dyn AsyncRead + Send>> = Box::pin(Cursor::new(Bytes::from_static(b"x")));
        let mut object = S3Object::new("bucket", "key")
            .with_content(S3ObjectStream::new(reader).with_abort_handle(handle.clone()));
        handle.abort();

        let err = object.read_all().await.expect_err("aborted read");
        assert!(matches!(err, Error::Aborted));
    }

    #[tokio::test]
    async fn test_should_abort_on_close_when_unread() {
        let (handle, _registration) = AbortHandle::new_pair();
        let reader: Pin<Box<dyn AsyncRead + Send>> = Box::pin(Cursor::new(Bytes::from_static(b"data")));
        let object = S3Object::new("bucket", "key")
            .with_content(S3ObjectStream::new(reader).with_abort_handle(handle.clone()));

        object.close();
        assert!(handle.is_aborted());
    }

    fn etag_of(body: &[u8]) -> String {
        format!("\"{}\"", hex::encode(Md5::digest(body).as_slice()))
    }

    #[tokio::test]
    async fn test_should_fail_read_all_on_truncated_body() {
        let result = get_object_result(b"hello").with_content_length(10);
        let mut object =
            S3Object::from_get_object("bucket", "key", result, &StreamConfig::default(), None);

        let err = object.read_all().await.expect_err("truncated body");
        assert!(matches!(&err, Error::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    }

    #[tokio::test]
    async fn test_should_validate_content_against_md5_etag() {
        let result = get_object_result(b"hello world").with_e_tag(etag_of(b"hello world"));
        let mut object =
            S3Object::from_get_object("bucket", "key", result, &StreamConfig::default(), None);

        let data = object.read_all().await.expect("matching digest");
        assert_eq!(&data[..], b"hello world");
    }

    #[tokio::test]
    async fn test_should_reject_content_not_matching_md5_etag() {
        let result = get_object_result(b"hello world").with_e_tag(etag_of(b"goodbye"));
        let mut object =
            S3Object::from_get_object("bucket", "key", result, &StreamConfig::default(), None);

        let err = object.read_all().await.expect_err("digest mismatch");
        assert!(matches!(&err, Error::Io(e) if e.kind() == std::io::ErrorKind::InvalidData));
    }

    #[tokio::test]
    async fn test_should_skip_md5_check_when_disabled_or_not_applicable() {
        let wrong = etag_of(b"goodbye");
        let config = StreamConfig::builder().validate_content_md5(false).build();
        let mut disabled = S3Object::from_get_object(
            "bucket",
            "key",
            get_object_result(b"hello").with_e_tag(wrong.clone()),
            &config,
            None,
        );
        assert!(disabled.read_all().await.is_ok());

        let mut encrypted = S3Object::from_get_object(
            "bucket",
            "key",
            get_object_result(b"hello")
                .with_e_tag(wrong)
                .with_server_side_encryption(ServerSideEncryption::AwsKms),
            &StreamConfig::default(),
            None,
        );
        assert!(encrypted.read_all().await.is_ok());

        let mut multipart = S3Object::from_get_object(
            "bucket",
            "key",
            get_object_result(b"hello").with_e_tag("\"0123456789abcdef0123456789abcdef-2\""),
            &StreamConfig::default(),
            None,
        );
        assert!(multipart.read_all().await.is_ok());
    }

    #[tokio::test]
    async fn test_should_abort_and_surface_reader_errors() {
        let (handle, _registration) = AbortHandle::new_pair();
        let mock = Builder::new()
            .read(b"par")
            .read_error(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset"))
            .build();
        let reader: Pin<Box<dyn AsyncRead + Send>> = Box::pin(mock);
        let mut object = S3Object::new("bucket", "key")
            .with_content(S3ObjectStream::new(reader).with_abort_handle(handle.clone()));

        let err = object.read_all().await.expect_err("reader error");
        assert!(matches!(&err, Error::Io(e) if e.kind() == std::io::ErrorKind::ConnectionReset));
        assert!(handle.is_aborted());
    }

    #[test]
    fn test_should_expose_charge_and_redirect() {
        let object = S3Object::new("bucket", "index.html").with_metadata(
            GetObjectResult::default()
                .with_request_charged(RequestCharged::Requester)
                .with_website_redirect_location("/new-index.html")
                .with_body("ignored"),
        );
        assert!(object.requester_charged());
        assert_eq!(object.redirect_location(), Some("/new-index.html"));
        assert!(object.metadata().body().is_none());
        assert!(!S3Object::default().requester_charged());
    }
}
