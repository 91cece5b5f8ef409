//! Object content stream with abort-on-close semantics.
//!
//! An S3 `GetObject` response body is tied to an HTTP connection. Dropping
//! the body early forces the transport to either drain the rest of the object
//! or tear the connection down. [`S3ObjectStream`] makes the second choice
//! explicit: closing it before end-of-stream aborts the exchange through the
//! [`AbortHandle`] the transport registered.
//!
//! The stream also checks what it received. At end-of-stream the byte count
//! must match the announced content length, and when an MD5 digest was
//! registered the content must hash to it.

use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::AbortHandle;
use md5::{Digest, Md5};
use pin_project_lite::pin_project;
use tokio::io::{AsyncRead, ReadBuf};

pin_project! {
    /// Object content read from S3.
    ///
    /// Reads are forwarded to the wrapped body. The stream tracks how many
    /// bytes were read and whether end-of-stream was observed, which drives
    /// [`close`](Self::close) and [`available`](Self::available). A body that
    /// ends short of its announced length, or whose content does not match
    /// its registered MD5 digest, fails the read that reaches end-of-stream.
    pub struct S3ObjectStream<R> {
        #[pin]
        inner: R,
        guard: AbortGuard,
        aborted: bool,
        eof: bool,
        bytes_read: u64,
        expected_length: Option<u64>,
        digest: Option<DigestCheck>,
    }
}

/// Running MD5 of the content and the digest it must end at.
struct DigestCheck {
    hasher: Md5,
    expected: [u8; 16],
}

impl DigestCheck {
    fn verify(self) -> io::Result<()> {
        let actual = self.hasher.finalize();
        if actual.as_slice() == self.expected.as_slice() {
            return Ok(());
        }
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "object content MD5 {} does not match expected {}",
                hex::encode(actual.as_slice()),
                hex::encode(self.expected)
            ),
        ))
    }
}

fn verify_length(bytes_read: u64, expected_length: Option<u64>) -> io::Result<()> {
    match expected_length {
        Some(len) if len != bytes_read => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("object content ended after {bytes_read} of {len} announced bytes"),
        )),
        _ => Ok(()),
    }
}

/// Aborts the exchange when an unfinished stream is dropped.
struct AbortGuard {
    handle: Option<AbortHandle>,
    abort_on_drop: bool,
    finished: bool,
    bytes_read: u64,
}

impl AbortGuard {
    fn is_aborted(&self) -> bool {
        self.handle.as_ref().is_some_and(AbortHandle::is_aborted)
    }

    fn abort(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        if self.abort_on_drop && !self.finished {
            tracing::warn!(
                bytes_read = self.bytes_read,
                "object content stream dropped before end-of-stream, aborting request"
            );
            self.abort();
        }
    }
}

impl<R> S3ObjectStream<R> {
    /// Wrap a response body with no abort handle and unknown length.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            guard: AbortGuard {
                handle: None,
                abort_on_drop: true,
                finished: false,
                bytes_read: 0,
            },
            aborted: false,
            eof: false,
            bytes_read: 0,
            expected_length: None,
            digest: None,
        }
    }

    /// Register the handle the transport uses to cancel the exchange.
    #[must_use]
    pub fn with_abort_handle(mut self, handle: AbortHandle) -> Self {
        self.guard.handle = Some(handle);
        self
    }

    /// Set the content length announced by the response.
    #[must_use]
    pub fn with_expected_length(mut self, expected_length: u64) -> Self {
        self.expected_length = Some(expected_length);
        self
    }

    /// Register the MD5 digest the content must hash to.
    #[must_use]
    pub fn with_expected_md5(mut self, expected: [u8; 16]) -> Self {
        self.digest = Some(DigestCheck {
            hasher: Md5::new(),
            expected,
        });
        self
    }

    /// Whether dropping the stream before it is fully read aborts the exchange.
    #[must_use]
    pub fn with_abort_on_drop(mut self, abort_on_drop: bool) -> Self {
        self.guard.abort_on_drop = abort_on_drop;
        self
    }

    /// Cancel the underlying exchange. Later reads fail with
    /// [`io::ErrorKind::ConnectionAborted`]. Calling this twice is a no-op.
    pub fn abort(&mut self) {
        if self.aborted {
            return;
        }
        tracing::debug!(
            bytes_read = self.bytes_read,
            expected_length = self.expected_length,
            "aborting object content stream"
        );
        self.aborted = true;
        self.guard.finished = true;
        self.guard.abort();
    }

    /// True after [`abort`](Self::abort), or once the transport's handle was
    /// aborted from elsewhere.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.aborted || self.guard.is_aborted()
    }

    /// An estimate of the bytes that can be read without reaching the end.
    ///
    /// Before end-of-stream this never returns 0, since callers commonly treat
    /// 0 as "nothing left". It reports the remaining content length when known
    /// and 1 otherwise. Once the stream is fully read or aborted it returns 0.
    #[must_use]
    pub fn available(&self) -> u64 {
        if self.is_fully_read() || self.is_aborted() {
            return 0;
        }
        self.expected_length
            .map_or(1, |len| len.saturating_sub(self.bytes_read).max(1))
    }

    /// Release the stream.
    ///
    /// A fully read stream is released normally and its connection can be
    /// reused. Otherwise the exchange is aborted rather than drained.
    pub fn close(mut self) {
        if !self.is_fully_read() && !self.is_aborted() {
            tracing::warn!(
                bytes_read = self.bytes_read,
                expected_length = self.expected_length,
                "not all bytes were read from the object content stream, aborting request"
            );
            self.abort();
        }
        self.guard.finished = true;
    }

    /// True once end-of-stream was observed or every announced byte was read.
    #[must_use]
    pub fn is_fully_read(&self) -> bool {
        self.eof
            || self
                .expected_length
                .is_some_and(|len| self.bytes_read >= len)
    }

    /// Bytes read from the body so far.
    #[must_use]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Content length announced by the response, if any.
    #[must_use]
    pub fn expected_length(&self) -> Option<u64> {
        self.expected_length
    }

    /// True once a read returned end-of-stream.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// The handle registered by the transport.
    pub fn abort_handle(&self) -> Option<&AbortHandle> {
        self.guard.handle.as_ref()
    }

    /// The wrapped body.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Return the wrapped body without aborting it.
    pub fn into_inner(self) -> R {
        let Self {
            inner, mut guard, ..
        } = self;
        guard.finished = true;
        inner
    }
}

impl<R> fmt::Debug for S3ObjectStream<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3ObjectStream")
            .field("aborted", &self.is_aborted())
            .field("eof", &self.eof)
            .field("bytes_read", &self.bytes_read)
            .field("expected_length", &self.expected_length)
            .field("abort_on_drop", &self.guard.abort_on_drop)
            .field("verify_md5", &self.digest.is_some())
            .finish_non_exhaustive()
    }
}

impl<R: AsyncRead> AsyncRead for S3ObjectStream<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.project();
        if *this.aborted || this.guard.is_aborted() {
            *this.aborted = true;
            this.guard.finished = true;
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::ConnectionAborted,
                "object content stream was aborted",
            )));
        }

        let capacity = buf.remaining();
        let before = buf.filled().len();
        let poll = this.inner.poll_read(cx, buf);
        if let Poll::Ready(Ok(())) = &poll {
            let filled = &buf.filled()[before..];
            if filled.is_empty() && capacity > 0 {
                *this.eof = true;
                this.guard.finished = true;
                verify_length(*this.bytes_read, *this.expected_length)?;
                if let Some(digest) = this.digest.take() {
                    digest.verify()?;
                }
            } else {
                if let Some(digest) = this.digest.as_mut() {
                    digest.hasher.update(filled);
                }
                *this.bytes_read += u64::try_from(filled.len()).unwrap_or(u64::MAX);
                this.guard.bytes_read = *this.bytes_read;
                if this
                    .expected_length
                    .is_some_and(|len| *this.bytes_read >= len)
                {
                    this.guard.finished = true;
                }
            }
        }
        poll
    }
}

#[cfg(test)]
mod tests {
    use futures::future::AbortRegistration;
    use tokio::io::AsyncReadExt;
    use tokio_test::io::Builder;

    use super::*;

    fn handle_pair() -> (AbortHandle, AbortRegistration) {
        AbortHandle::new_pair()
    }

    fn md5_of(data: &[u8]) -> [u8; 16] {
        Md5::digest(data).into()
    }

    #[tokio::test]
    async fn test_should_track_bytes_and_eof() {
        let mock = Builder::new().read(b"hello ").read(b"world").build();
        let mut stream = S3ObjectStream::new(mock).with_expected_length(11);

        let mut out = Vec::new();
        stream.read_to_end(&mut out).await.expect("read body");

        assert_eq!(out, b"hello world");
        assert_eq!(stream.bytes_read(), 11);
        assert!(stream.is_eof());
        assert_eq!(stream.available(), 0);
    }

    #[tokio::test]
    async fn test_should_count_down_available_until_fully_read() {
        let mock = Builder::new().read(b"abcdef").build();
        let mut stream = S3ObjectStream::new(mock).with_expected_length(6);
        assert_eq!(stream.available(), 6);

        let mut buf = [0_u8; 4];
        stream.read_exact(&mut buf).await.expect("read prefix");
        assert_eq!(stream.available(), 2);

        let mut rest = [0_u8; 2];
        stream.read_exact(&mut rest).await.expect("read rest");
        assert!(!stream.is_eof());
        assert!(stream.is_fully_read());
        assert_eq!(stream.available(), 0);
    }

    #[tokio::test]
    async fn test_should_report_one_available_until_eof_without_length() {
        let mut stream = S3ObjectStream::new(Builder::new().read(b"abc").build());

        let mut buf = [0_u8; 3];
        stream.read_exact(&mut buf).await.expect("read body");
        assert_eq!(stream.available(), 1);

        let n = stream.read(&mut buf).await.expect("read eof");
        assert_eq!(n, 0);
        assert_eq!(stream.available(), 0);
    }

    #[tokio::test]
    async fn test_should_report_one_available_for_unknown_length() {
        let stream = S3ObjectStream::new(Builder::new().build());
        assert_eq!(stream.available(), 1);
        stream.close();
    }

    #[tokio::test]
    async fn test_should_fail_reads_after_abort() {
        let (handle, _registration) = handle_pair();
        let mut stream =
            S3ObjectStream::new(Builder::new().build()).with_abort_handle(handle.clone());

        stream.abort();
        stream.abort();
        assert!(stream.is_aborted());
        assert!(handle.is_aborted());
        assert_eq!(stream.available(), 0);

        let mut buf = [0_u8; 8];
        let err = stream.read(&mut buf).await.expect_err("read after abort");
        assert_eq!(err.kind(), io::ErrorKind::ConnectionAborted);
    }

    #[tokio::test]
    async fn test_should_observe_abort_from_transport() {
        let (handle, _registration) = handle_pair();
        let stream =
            S3ObjectStream::new(Builder::new().build()).with_abort_handle(handle.clone());
        handle.abort();
        assert!(stream.is_aborted());
        stream.close();
    }

    #[tokio::test]
    async fn test_should_abort_when_closed_early() {
        let (handle, _registration) = handle_pair();
        let body = std::io::Cursor::new(b"0123456789".to_vec());
        let mut stream = S3ObjectStream::new(body)
            .with_expected_length(10)
            .with_abort_handle(handle.clone());

        let mut buf = [0_u8; 4];
        stream.read_exact(&mut buf).await.expect("read prefix");
        stream.close();

        assert!(handle.is_aborted());
    }

    #[tokio::test]
    async fn test_should_release_stream_after_reading_announced_length() {
        let (handle, _registration) = handle_pair();
        let mock = Builder::new().read(b"0123456789").build();
        let mut stream = S3ObjectStream::new(mock)
            .with_expected_length(10)
            .with_abort_handle(handle.clone());

        let mut buf = [0_u8; 10];
        stream.read_exact(&mut buf).await.expect("read body");
        stream.close();

        assert!(!handle.is_aborted());
    }

    #[tokio::test]
    async fn test_should_not_abort_on_drop_after_reading_announced_length() {
        let (handle, _registration) = handle_pair();
        let mock = Builder::new().read(b"01234").build();
        let mut stream = S3ObjectStream::new(mock)
            .with_expected_length(5)
            .with_abort_handle(handle.clone());

        let mut buf = [0_u8; 5];
        stream.read_exact(&mut buf).await.expect("read body");
        drop(stream);

        assert!(!handle.is_aborted());
    }

    #[tokio::test]
    async fn test_should_fail_when_body_is_shorter_than_announced() {
        let mock = Builder::new().read(b"hello").build();
        let mut stream = S3ObjectStream::new(mock).with_expected_length(10);

        let mut out = Vec::new();
        let err = stream.read_to_end(&mut out).await.expect_err("truncated body");

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(stream.bytes_read(), 5);
    }

    #[tokio::test]
    async fn test_should_accept_content_matching_md5() {
        let mock = Builder::new().read(b"hello ").read(b"world").build();
        let mut stream = S3ObjectStream::new(mock).with_expected_md5(md5_of(b"hello world"));

        let mut out = Vec::new();
        stream.read_to_end(&mut out).await.expect("read body");
        assert_eq!(out, b"hello world");
    }

    #[tokio::test]
    async fn test_should_reject_content_with_wrong_md5() {
        let mock = Builder::new().read(b"hello world").build();
        let mut stream = S3ObjectStream::new(mock)
            .with_expected_length(11)
            .with_expected_md5(md5_of(b"something else"));

        let mut out = Vec::new();
        let err = stream.read_to_end(&mut out).await.expect_err("digest mismatch");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_should_release_fully_read_stream_without_abort() {
        let (handle, _registration) = handle_pair();
        let mock = Builder::new().read(b"done").build();
        let mut stream = S3ObjectStream::new(mock).with_abort_handle(handle.clone());

        let mut out = Vec::new();
        stream.read_to_end(&mut out).await.expect("read body");
        stream.close();

        assert!(!handle.is_aborted());
    }

    #[tokio::test]
    async fn test_should_abort_on_drop_by_default() {
        let (handle, _registration) = handle_pair();
        drop(S3ObjectStream::new(Builder::new().build()).with_abort_handle(handle.clone()));
        assert!(handle.is_aborted());
    }

    #[tokio::test]
    async fn test_should_not_abort_on_drop_when_disabled() {
        let (handle, _registration) = handle_pair();
        drop(
            S3ObjectStream::new(Builder::new().build())
                .with_abort_handle(handle.clone())
                .with_abort_on_drop(false),
        );
        assert!(!handle.is_aborted());
    }

    #[tokio::test]
    async fn test_should_not_abort_when_unwrapped() {
        let (handle, _registration) = handle_pair();
        let stream = S3ObjectStream::new(Builder::new().build()).with_abort_handle(handle.clone());
        let _inner = stream.into_inner();
        assert!(!handle.is_aborted());
    }
}
