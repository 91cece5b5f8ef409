//! Error types returned by the model layer and surfaced to S3 callers.

use std::collections::HashMap;

use crate::envelope::ResponseMetadata;
use crate::error::S3ErrorCode;
use crate::result::DeleteObjectsResult;
use crate::types::{DeleteError, DeletedObject};

/// Result alias used across the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which side of the exchange an S3 error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorType {
    /// The request was rejected (4xx).
    Client,
    /// The service failed to process a valid request (5xx).
    Service,
    /// No status code was available or it was outside both ranges.
    #[default]
    Unknown,
}

impl ErrorType {
    /// Classify an HTTP status code.
    #[must_use]
    pub fn from_status(status: http::StatusCode) -> Self {
        if status.is_client_error() {
            Self::Client
        } else if status.is_server_error() {
            Self::Service
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Service => "Service",
            Self::Unknown => "Unknown",
        }
    }
}

/// An error response returned by the S3 service.
///
/// Besides the standard request id, S3 returns an extended request id
/// (`x-amz-id-2`) and, behind CloudFront, a CloudFront id. All three are
/// needed when reporting an issue to AWS, so all three are rendered by
/// `Display`.
#[derive(Debug, thiserror::Error)]
#[error(
    "{message} (Service: Amazon S3; Status Code: {}; Error Code: {code}; Request ID: {}; S3 Extended Request ID: {})",
    .status_code.as_u16(),
    .request_id.as_deref().unwrap_or("none"),
    .extended_request_id.as_deref().unwrap_or("none")
)]
pub struct S3Error {
    /// The error code.
    pub code: S3ErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The resource that caused the error.
    pub resource: Option<String>,
    /// The request ID (`x-amz-request-id`).
    pub request_id: Option<String>,
    /// The extended request ID (`x-amz-id-2`).
    pub extended_request_id: Option<String>,
    /// The CloudFront ID (`X-Amz-Cf-Id`).
    pub cloud_front_id: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// Client or service fault, derived from the status code unless overridden.
    pub error_type: ErrorType,
    /// Extra elements found in the error response body.
    pub additional_details: HashMap<String, String>,
    /// The raw error response document, when the transport kept it.
    pub error_response_xml: Option<String>,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl S3Error {
    /// Create a new S3Error from an error code.
    #[must_use]
    pub fn new(code: S3ErrorCode) -> Self {
        let message = code.default_message().to_owned();
        Self::with_message(code, message)
    }

    /// Create a new S3Error with a custom message.
    #[must_use]
    pub fn with_message(code: S3ErrorCode, message: impl Into<String>) -> Self {
        let status_code = code.default_status_code();
        Self {
            code,
            message: message.into(),
            resource: None,
            request_id: None,
            extended_request_id: None,
            cloud_front_id: None,
            status_code,
            error_type: ErrorType::from_status(status_code),
            additional_details: HashMap::new(),
            error_response_xml: None,
            source: None,
        }
    }

    /// Set the resource that caused this error.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    #[must_use]
    pub fn with_extended_request_id(mut self, extended_request_id: impl Into<String>) -> Self {
        self.extended_request_id = Some(extended_request_id.into());
        self
    }

    #[must_use]
    pub fn with_cloud_front_id(mut self, cloud_front_id: impl Into<String>) -> Self {
        self.cloud_front_id = Some(cloud_front_id.into());
        self
    }

    /// Copy the request ids out of the response metadata.
    #[must_use]
    pub fn with_response_metadata(mut self, metadata: &ResponseMetadata) -> Self {
        self.request_id.clone_from(&metadata.request_id);
        self.extended_request_id
            .clone_from(&metadata.extended_request_id);
        self.cloud_front_id.clone_from(&metadata.cloud_front_id);
        self
    }

    /// Set the status code actually returned, reclassifying the error type.
    #[must_use]
    pub fn with_status_code(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self.error_type = ErrorType::from_status(status_code);
        self
    }

    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = error_type;
        self
    }

    #[must_use]
    pub fn with_additional_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_details.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_error_response_xml(mut self, xml: impl Into<String>) -> Self {
        self.error_response_xml = Some(xml.into());
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The wire error code.
    #[must_use]
    pub fn error_code(&self) -> &str {
        self.code.as_str()
    }

    /// Create a NoSuchBucket error.
    #[must_use]
    pub fn no_such_bucket(bucket_name: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::NoSuchBucket).with_resource(bucket_name)
    }

    /// Create a NoSuchKey error.
    #[must_use]
    pub fn no_such_key(key: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::NoSuchKey).with_resource(key)
    }

    /// Create a NoSuchUpload error.
    #[must_use]
    pub fn no_such_upload(upload_id: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::NoSuchUpload).with_resource(upload_id)
    }

    /// Create a NoSuchVersion error.
    #[must_use]
    pub fn no_such_version(version_id: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::NoSuchVersion).with_resource(version_id)
    }

    /// Create an AccessDenied error.
    #[must_use]
    pub fn access_denied(resource: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::AccessDenied).with_resource(resource)
    }

    /// Create an InternalError error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(S3ErrorCode::InternalError, message)
    }
}

/// Create an S3Error from an error code.
///
/// # Examples
///
/// ```
/// use s3sdk_model::s3_error;
/// use s3sdk_model::error::S3ErrorCode;
///
/// let err = s3_error!(NoSuchBucket);
/// assert_eq!(err.code, S3ErrorCode::NoSuchBucket);
///
/// let err = s3_error!(NoSuchKey, "The key does not exist");
/// assert_eq!(err.message, "The key does not exist");
/// ```
#[macro_export]
macro_rules! s3_error {
    ($code:ident) => {
        $crate::exception::S3Error::new($crate::error::S3ErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::exception::S3Error::with_message($crate::error::S3ErrorCode::$code, $msg)
    };
}

/// A `DeleteObjects` call that succeeded at the HTTP level but failed for
/// some of its keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("one or more objects could not be deleted ({} errors, {} deleted)", .errors.len(), .deleted.len())]
pub struct MultiObjectDeleteError {
    /// Per-key failures.
    pub errors: Vec<DeleteError>,
    /// Keys that were deleted by the same request.
    pub deleted: Vec<DeletedObject>,
}

impl MultiObjectDeleteError {
    /// Returns `Some` only when the result carries at least one per-key error.
    #[must_use]
    pub fn from_result(result: &DeleteObjectsResult) -> Option<Self> {
        if result.errors.is_empty() {
            return None;
        }
        Some(Self {
            errors: result.errors.clone(),
            deleted: result.deleted.clone(),
        })
    }
}

/// Failure to map a wire value onto a model enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEnumError {
    #[error("value cannot be empty for {enum_name}")]
    Empty { enum_name: &'static str },
    #[error("cannot create {enum_name} from value: {value}")]
    Unknown {
        enum_name: &'static str,
        value: String,
    },
}

impl ParseEnumError {
    /// Build the error for `value`, distinguishing empty input.
    #[must_use]
    pub fn new(enum_name: &'static str, value: &str) -> Self {
        if value.is_empty() {
            Self::Empty { enum_name }
        } else {
            Self::Unknown {
                enum_name,
                value: value.to_owned(),
            }
        }
    }
}

/// Returned by `add_*_entry` methods when the key is already present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicated keys ({key}) are provided for {field}")]
pub struct DuplicateKeyError {
    pub field: &'static str,
    pub key: String,
}

impl DuplicateKeyError {
    #[must_use]
    pub fn new(field: &'static str, key: impl Into<String>) -> Self {
        Self {
            field,
            key: key.into(),
        }
    }
}

/// Top-level error for the model and I/O crates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Service(#[from] S3Error),
    #[error(transparent)]
    MultiObjectDelete(#[from] MultiObjectDeleteError),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Parse(#[from] ParseEnumError),
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),
    #[error("the object content stream was aborted")]
    Aborted,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_classify_error_type_from_status() {
        assert_eq!(
            ErrorType::from_status(http::StatusCode::NOT_FOUND),
            ErrorType::Client
        );
        assert_eq!(
            ErrorType::from_status(http::StatusCode::SERVICE_UNAVAILABLE),
            ErrorType::Service
        );
        assert_eq!(
            ErrorType::from_status(http::StatusCode::NOT_MODIFIED),
            ErrorType::Unknown
        );
    }

    #[test]
    fn test_should_fill_defaults_from_error_code() {
        let err = S3Error::no_such_key("photos/cat.jpg");
        assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
        assert_eq!(err.error_type, ErrorType::Client);
        assert_eq!(err.message, "The specified key does not exist");
        assert_eq!(err.resource.as_deref(), Some("photos/cat.jpg"));
        assert_eq!(err.error_code(), "NoSuchKey");
    }

    #[test]
    fn test_should_render_both_request_ids() {
        let err = s3_error!(AccessDenied)
            .with_request_id("REQ123")
            .with_extended_request_id("EXT456");
        let rendered = err.to_string();
        assert!(rendered.starts_with("Access Denied (Service: Amazon S3; Status Code: 403;"));
        assert!(rendered.contains("Error Code: AccessDenied"));
        assert!(rendered.contains("Request ID: REQ123"));
        assert!(rendered.contains("S3 Extended Request ID: EXT456"));
    }

    #[test]
    fn test_should_copy_ids_from_response_metadata() {
        let metadata = ResponseMetadata {
            request_id: Some("r".to_owned()),
            extended_request_id: Some("x".to_owned()),
            cloud_front_id: Some("cf".to_owned()),
        };
        let err = S3Error::internal_error("boom").with_response_metadata(&metadata);
        assert_eq!(err.request_id.as_deref(), Some("r"));
        assert_eq!(err.extended_request_id.as_deref(), Some("x"));
        assert_eq!(err.cloud_front_id.as_deref(), Some("cf"));
        assert_eq!(err.error_type, ErrorType::Service);
    }

    #[test]
    fn test_should_reclassify_on_status_override() {
        let err = S3Error::with_message(S3ErrorCode::from_code("Throttled"), "slow")
            .with_status_code(http::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_type, ErrorType::Service);
        assert_eq!(err.error_code(), "Throttled");
    }

    #[test]
    fn test_should_expose_source_error() {
        use std::error::Error as _;

        let io = std::io::Error::other("socket closed");
        let err = S3Error::internal_error("failed").with_source(io);
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("socket closed"));
    }

    #[test]
    fn test_should_only_raise_multi_object_delete_on_errors() {
        let mut result = DeleteObjectsResult::default().with_deleted([DeletedObject::default()
            .with_key("a.txt")]);
        assert!(MultiObjectDeleteError::from_result(&result).is_none());

        result = result.with_errors([DeleteError::default()
            .with_key("b.txt")
            .with_code("AccessDenied")]);
        let err = MultiObjectDeleteError::from_result(&result);
        let err = err.as_ref();
        assert_eq!(err.map(|e| e.errors.len()), Some(1));
        assert_eq!(err.map(|e| e.deleted.len()), Some(1));
    }

    #[test]
    fn test_should_distinguish_empty_enum_value() {
        assert_eq!(
            ParseEnumError::new("StorageClass", ""),
            ParseEnumError::Empty {
                enum_name: "StorageClass"
            }
        );
        let err = ParseEnumError::new("StorageClass", "SUPER_COLD");
        assert_eq!(
            err.to_string(),
            "cannot create StorageClass from value: SUPER_COLD"
        );
    }

    #[test]
    fn test_should_convert_into_crate_error() {
        let err: Error = DuplicateKeyError::new("metadata", "a").into();
        assert!(matches!(err, Error::DuplicateKey(_)));
        let err: Error = s3_error!(NoSuchBucket).into();
        assert!(matches!(err, Error::Service(_)));
    }
}
