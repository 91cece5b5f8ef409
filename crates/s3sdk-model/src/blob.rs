//! In-memory payload type used for object bodies.

use bytes::Bytes;

/// An object body held in memory.
///
/// Request payloads (`PutObject`, `UploadPart`) and buffered response bodies
/// (`GetObject`, `GetObjectTorrent`) use this type. Streaming reads of large
/// objects go through `s3sdk_io::S3ObjectStream` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamingBlob {
    /// The underlying bytes data.
    pub data: Bytes,
}

impl StreamingBlob {
    /// Create a new `StreamingBlob` from bytes.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns true if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &Bytes {
        &self.data
    }

    /// Consumes the blob, returning the shared buffer without copying.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

impl From<Bytes> for StreamingBlob {
    fn from(data: Bytes) -> Self {
        Self { data }
    }
}

impl From<Vec<u8>> for StreamingBlob {
    fn from(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&[u8]> for StreamingBlob {
    fn from(data: &[u8]) -> Self {
        Self {
            data: Bytes::copy_from_slice(data),
        }
    }
}

impl From<String> for StreamingBlob {
    fn from(data: String) -> Self {
        Self { data: data.into() }
    }
}

impl From<&str> for StreamingBlob {
    fn from(data: &str) -> Self {
        Self {
            data: Bytes::copy_from_slice(data.as_bytes()),
        }
    }
}

impl From<StreamingBlob> for Bytes {
    fn from(blob: StreamingBlob) -> Self {
        blob.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_report_length_of_blob() {
        let blob = StreamingBlob::from("hello");
        assert_eq!(blob.len(), 5);
        assert!(!blob.is_empty());
        assert!(StreamingBlob::default().is_empty());
    }

    #[test]
    fn test_should_compare_blobs_by_content() {
        let a = StreamingBlob::from(b"abc".as_slice());
        let b = StreamingBlob::from(vec![b'a', b'b', b'c']);
        assert_eq!(a, b);
        assert_ne!(a, StreamingBlob::from("abd"));
    }

    #[test]
    fn test_should_hand_back_underlying_bytes() {
        let data = Bytes::from_static(b"payload");
        let blob = StreamingBlob::new(data.clone());
        assert_eq!(blob.as_bytes(), &data);
        assert_eq!(blob.into_bytes(), data);
    }
}
