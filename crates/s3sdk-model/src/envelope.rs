//! Per-call wrappers around model requests and results.
//!
//! A transport receives an [`S3Request`] carrying the operation's request
//! struct plus call-level overrides, and hands back an [`S3Response`] pairing
//! the operation's result struct with the ids S3 attached to the response.

use std::collections::BTreeMap;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-amz-request-id";
/// Response header carrying the extended request id.
pub const EXTENDED_REQUEST_ID_HEADER: &str = "x-amz-id-2";
/// Response header set when the request passed through CloudFront.
pub const CLOUD_FRONT_ID_HEADER: &str = "x-amz-cf-id";

/// AWS credentials overriding the client's provider for one request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The AWS access key ID.
    pub access_key_id: String,
    /// The AWS secret access key.
    pub secret_access_key: String,
    /// Optional session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    #[must_use]
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// A model request plus call-level overrides.
#[derive(Debug, Clone)]
pub struct S3Request<T> {
    /// The operation's request struct.
    pub input: T,
    /// Optional credentials for the request.
    pub credentials: Option<Credentials>,
    /// Additional HTTP headers sent verbatim.
    pub headers: http::HeaderMap,
    /// Additional query parameters; a name may repeat.
    pub query_params: BTreeMap<String, Vec<String>>,
    /// Bytes of the request body the transport may buffer for replay.
    pub read_limit: Option<usize>,
}

impl<T: Default> Default for S3Request<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> S3Request<T> {
    /// Create a new S3Request with the given input.
    #[must_use]
    pub fn new(input: T) -> Self {
        Self {
            input,
            credentials: None,
            headers: http::HeaderMap::new(),
            query_params: BTreeMap::new(),
            read_limit: None,
        }
    }

    /// Set the credentials for this request.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Append a header, keeping earlier values of the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Append a query parameter, keeping earlier values of the same name.
    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    #[must_use]
    pub fn with_read_limit(mut self, read_limit: usize) -> Self {
        self.read_limit = Some(read_limit);
        self
    }

    #[must_use]
    pub fn input(&self) -> &T {
        &self.input
    }

    /// Map the input type to a different type.
    pub fn map_input<U>(self, f: impl FnOnce(T) -> U) -> S3Request<U> {
        S3Request {
            input: f(self.input),
            credentials: self.credentials,
            headers: self.headers,
            query_params: self.query_params,
            read_limit: self.read_limit,
        }
    }

    /// Discard the overrides and return the request struct.
    pub fn into_input(self) -> T {
        self.input
    }
}

/// Ids S3 attaches to every response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    pub request_id: Option<String>,
    pub extended_request_id: Option<String>,
    pub cloud_front_id: Option<String>,
}

impl ResponseMetadata {
    /// Read the ids from response headers. Non-UTF-8 values are ignored.
    #[must_use]
    pub fn from_headers(headers: &http::HeaderMap) -> Self {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToOwned::to_owned)
        };
        Self {
            request_id: get(REQUEST_ID_HEADER),
            extended_request_id: get(EXTENDED_REQUEST_ID_HEADER),
            cloud_front_id: get(CLOUD_FRONT_ID_HEADER),
        }
    }
}

/// A model result plus the response metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3Response<T> {
    pub output: T,
    pub metadata: ResponseMetadata,
}

impl<T> S3Response<T> {
    #[must_use]
    pub fn new(output: T, metadata: ResponseMetadata) -> Self {
        Self { output, metadata }
    }

    /// Build a response, pulling the metadata from the response headers.
    #[must_use]
    pub fn from_parts(output: T, headers: &http::HeaderMap) -> Self {
        Self::new(output, ResponseMetadata::from_headers(headers))
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.metadata.request_id.as_deref()
    }

    pub fn map_output<U>(self, f: impl FnOnce(T) -> U) -> S3Response<U> {
        S3Response {
            output: f(self.output),
            metadata: self.metadata,
        }
    }

    pub fn into_output(self) -> T {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderName, HeaderValue};

    use super::*;
    use crate::request::GetObjectRequest;

    #[test]
    fn test_should_redact_credentials_in_debug() {
        let creds = Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI").with_session_token("token");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("AKIDEXAMPLE"));
        assert!(!rendered.contains("wJalrXUtnFEMI"));
        assert!(!rendered.contains("token\""));
    }

    #[test]
    fn test_should_accumulate_custom_query_params() {
        let request = S3Request::new(GetObjectRequest::new("bucket", "key"))
            .with_query_param("x-id", "1")
            .with_query_param("x-id", "2")
            .with_read_limit(128 * 1024);
        assert_eq!(
            request.query_params.get("x-id"),
            Some(&vec!["1".to_owned(), "2".to_owned()])
        );
        assert_eq!(request.read_limit, Some(128 * 1024));
    }

    #[test]
    fn test_should_keep_overrides_when_mapping_input() {
        let request = S3Request::new(GetObjectRequest::new("bucket", "key"))
            .with_header(
                HeaderName::from_static("x-custom"),
                HeaderValue::from_static("v"),
            )
            .with_credentials(Credentials::new("a", "b"));
        let mapped = request.map_input(|input| input.key().to_owned());
        assert_eq!(mapped.input, "key");
        assert_eq!(mapped.headers.get("x-custom").map(HeaderValue::as_bytes), Some(&b"v"[..]));
        assert!(mapped.credentials.is_some());
    }

    #[test]
    fn test_should_read_metadata_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-request-id", HeaderValue::from_static("4442587FB7D0A2F9"));
        headers.insert("x-amz-id-2", HeaderValue::from_static("ext"));
        headers.insert("x-amz-cf-id", HeaderValue::from_static("cf"));

        let response = S3Response::from_parts((), &headers);
        assert_eq!(response.request_id(), Some("4442587FB7D0A2F9"));
        assert_eq!(response.metadata.extended_request_id.as_deref(), Some("ext"));
        assert_eq!(response.metadata.cloud_front_id.as_deref(), Some("cf"));
    }

    #[test]
    fn test_should_leave_missing_ids_unset() {
        let metadata = ResponseMetadata::from_headers(&HeaderMap::new());
        assert_eq!(metadata, ResponseMetadata::default());
    }
}
