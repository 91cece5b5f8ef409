//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use std::fmt;

/// Well-known S3 error codes.
///
/// The service may return codes outside this set; those are preserved in
/// [`S3ErrorCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum S3ErrorCode {
    /// Default error code.
    #[default]
    /// AccessDenied error.
    AccessDenied,
    /// AccountProblem error.
    AccountProblem,
    /// BadDigest error.
    BadDigest,
    /// BucketAlreadyExists error.
    BucketAlreadyExists,
    /// BucketAlreadyOwnedByYou error.
    BucketAlreadyOwnedByYou,
    /// BucketNotEmpty error.
    BucketNotEmpty,
    /// ConditionalRequestConflict error.
    ConditionalRequestConflict,
    /// EntityTooLarge error.
    EntityTooLarge,
    /// EntityTooSmall error.
    EntityTooSmall,
    /// ExpiredToken error.
    ExpiredToken,
    /// InternalError error.
    InternalError,
    /// InvalidAccessKeyId error.
    InvalidAccessKeyId,
    /// InvalidArgument error.
    InvalidArgument,
    /// InvalidBucketName error.
    InvalidBucketName,
    /// InvalidBucketState error.
    InvalidBucketState,
    /// InvalidDigest error.
    InvalidDigest,
    /// InvalidLocationConstraint error.
    InvalidLocationConstraint,
    /// InvalidObjectState error.
    InvalidObjectState,
    /// InvalidPart error.
    InvalidPart,
    /// InvalidPartOrder error.
    InvalidPartOrder,
    /// InvalidRange error.
    InvalidRange,
    /// InvalidRequest error.
    InvalidRequest,
    /// InvalidStorageClass error.
    InvalidStorageClass,
    /// InvalidToken error.
    InvalidToken,
    /// KeyTooLongError error.
    KeyTooLongError,
    /// MalformedXML error.
    MalformedXML,
    /// MaxMessageLengthExceeded error.
    MaxMessageLengthExceeded,
    /// MetadataTooLarge error.
    MetadataTooLarge,
    /// MethodNotAllowed error.
    MethodNotAllowed,
    /// MissingContentLength error.
    MissingContentLength,
    /// NoSuchBucket error.
    NoSuchBucket,
    /// NoSuchBucketPolicy error.
    NoSuchBucketPolicy,
    /// NoSuchCORSConfiguration error.
    NoSuchCORSConfiguration,
    /// NoSuchConfiguration error.
    NoSuchConfiguration,
    /// NoSuchKey error.
    NoSuchKey,
    /// NoSuchLifecycleConfiguration error.
    NoSuchLifecycleConfiguration,
    /// NoSuchObjectLockConfiguration error.
    NoSuchObjectLockConfiguration,
    /// NoSuchPublicAccessBlockConfiguration error.
    NoSuchPublicAccessBlockConfiguration,
    /// NoSuchTagSet error.
    NoSuchTagSet,
    /// NoSuchUpload error.
    NoSuchUpload,
    /// NoSuchVersion error.
    NoSuchVersion,
    /// NoSuchWebsiteConfiguration error.
    NoSuchWebsiteConfiguration,
    /// NotImplemented error.
    NotImplemented,
    /// NotModified error.
    NotModified,
    /// ObjectNotInActiveTierError error.
    ObjectNotInActiveTierError,
    /// OwnershipControlsNotFoundError error.
    OwnershipControlsNotFoundError,
    /// PreconditionFailed error.
    PreconditionFailed,
    /// ReplicationConfigurationNotFoundError error.
    ReplicationConfigurationNotFoundError,
    /// RequestTimeTooSkewed error.
    RequestTimeTooSkewed,
    /// RequestTimeout error.
    RequestTimeout,
    /// RestoreAlreadyInProgress error.
    RestoreAlreadyInProgress,
    /// ServerSideEncryptionConfigurationNotFoundError error.
    ServerSideEncryptionConfigurationNotFoundError,
    /// ServiceUnavailable error.
    ServiceUnavailable,
    /// SignatureDoesNotMatch error.
    SignatureDoesNotMatch,
    /// SlowDown error.
    SlowDown,
    /// TooManyBuckets error.
    TooManyBuckets,
    /// XAmzContentSHA256Mismatch error.
    XAmzContentSHA256Mismatch,
    /// An error code not in the well-known set.
    Other(String),
}

impl S3ErrorCode {
    /// Returns the error code as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AccessDenied => "AccessDenied",
            Self::AccountProblem => "AccountProblem",
            Self::BadDigest => "BadDigest",
            Self::BucketAlreadyExists => "BucketAlreadyExists",
            Self::BucketAlreadyOwnedByYou => "BucketAlreadyOwnedByYou",
            Self::BucketNotEmpty => "BucketNotEmpty",
            Self::ConditionalRequestConflict => "ConditionalRequestConflict",
            Self::EntityTooLarge => "EntityTooLarge",
            Self::EntityTooSmall => "EntityTooSmall",
            Self::ExpiredToken => "ExpiredToken",
            Self::InternalError => "InternalError",
            Self::InvalidAccessKeyId => "InvalidAccessKeyId",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidBucketName => "InvalidBucketName",
            Self::InvalidBucketState => "InvalidBucketState",
            Self::InvalidDigest => "InvalidDigest",
            Self::InvalidLocationConstraint => "InvalidLocationConstraint",
            Self::InvalidObjectState => "InvalidObjectState",
            Self::InvalidPart => "InvalidPart",
            Self::InvalidPartOrder => "InvalidPartOrder",
            Self::InvalidRange => "InvalidRange",
            Self::InvalidRequest => "InvalidRequest",
            Self::InvalidStorageClass => "InvalidStorageClass",
            Self::InvalidToken => "InvalidToken",
            Self::KeyTooLongError => "KeyTooLongError",
            Self::MalformedXML => "MalformedXML",
            Self::MaxMessageLengthExceeded => "MaxMessageLengthExceeded",
            Self::MetadataTooLarge => "MetadataTooLarge",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::MissingContentLength => "MissingContentLength",
            Self::NoSuchBucket => "NoSuchBucket",
            Self::NoSuchBucketPolicy => "NoSuchBucketPolicy",
            Self::NoSuchCORSConfiguration => "NoSuchCORSConfiguration",
            Self::NoSuchConfiguration => "NoSuchConfiguration",
            Self::NoSuchKey => "NoSuchKey",
            Self::NoSuchLifecycleConfiguration => "NoSuchLifecycleConfiguration",
            Self::NoSuchObjectLockConfiguration => "NoSuchObjectLockConfiguration",
            Self::NoSuchPublicAccessBlockConfiguration => "NoSuchPublicAccessBlockConfiguration",
            Self::NoSuchTagSet => "NoSuchTagSet",
            Self::NoSuchUpload => "NoSuchUpload",
            Self::NoSuchVersion => "NoSuchVersion",
            Self::NoSuchWebsiteConfiguration => "NoSuchWebsiteConfiguration",
            Self::NotImplemented => "NotImplemented",
            Self::NotModified => "NotModified",
            Self::ObjectNotInActiveTierError => "ObjectNotInActiveTierError",
            Self::OwnershipControlsNotFoundError => "OwnershipControlsNotFoundError",
            Self::PreconditionFailed => "PreconditionFailed",
            Self::ReplicationConfigurationNotFoundError => "ReplicationConfigurationNotFoundError",
            Self::RequestTimeTooSkewed => "RequestTimeTooSkewed",
            Self::RequestTimeout => "RequestTimeout",
            Self::RestoreAlreadyInProgress => "RestoreAlreadyInProgress",
            Self::ServerSideEncryptionConfigurationNotFoundError => {
                "ServerSideEncryptionConfigurationNotFoundError"
            }
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::SignatureDoesNotMatch => "SignatureDoesNotMatch",
            Self::SlowDown => "SlowDown",
            Self::TooManyBuckets => "TooManyBuckets",
            Self::XAmzContentSHA256Mismatch => "XAmzContentSHA256Mismatch",
            Self::Other(s) => s,
        }
    }

    /// Maps a wire error code to a known variant, keeping unknown codes as [`Self::Other`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "AccessDenied" => Self::AccessDenied,
            "AccountProblem" => Self::AccountProblem,
            "BadDigest" => Self::BadDigest,
            "BucketAlreadyExists" => Self::BucketAlreadyExists,
            "BucketAlreadyOwnedByYou" => Self::BucketAlreadyOwnedByYou,
            "BucketNotEmpty" => Self::BucketNotEmpty,
            "ConditionalRequestConflict" => Self::ConditionalRequestConflict,
            "EntityTooLarge" => Self::EntityTooLarge,
            "EntityTooSmall" => Self::EntityTooSmall,
            "ExpiredToken" => Self::ExpiredToken,
            "InternalError" => Self::InternalError,
            "InvalidAccessKeyId" => Self::InvalidAccessKeyId,
            "InvalidArgument" => Self::InvalidArgument,
            "InvalidBucketName" => Self::InvalidBucketName,
            "InvalidBucketState" => Self::InvalidBucketState,
            "InvalidDigest" => Self::InvalidDigest,
            "InvalidLocationConstraint" => Self::InvalidLocationConstraint,
            "InvalidObjectState" => Self::InvalidObjectState,
            "InvalidPart" => Self::InvalidPart,
            "InvalidPartOrder" => Self::InvalidPartOrder,
            "InvalidRange" => Self::InvalidRange,
            "InvalidRequest" => Self::InvalidRequest,
            "InvalidStorageClass" => Self::InvalidStorageClass,
            "InvalidToken" => Self::InvalidToken,
            "KeyTooLongError" => Self::KeyTooLongError,
            "MalformedXML" => Self::MalformedXML,
            "MaxMessageLengthExceeded" => Self::MaxMessageLengthExceeded,
            "MetadataTooLarge" => Self::MetadataTooLarge,
            "MethodNotAllowed" => Self::MethodNotAllowed,
            "MissingContentLength" => Self::MissingContentLength,
            "NoSuchBucket" => Self::NoSuchBucket,
            "NoSuchBucketPolicy" => Self::NoSuchBucketPolicy,
            "NoSuchCORSConfiguration" => Self::NoSuchCORSConfiguration,
            "NoSuchConfiguration" => Self::NoSuchConfiguration,
            "NoSuchKey" => Self::NoSuchKey,
            "NoSuchLifecycleConfiguration" => Self::NoSuchLifecycleConfiguration,
            "NoSuchObjectLockConfiguration" => Self::NoSuchObjectLockConfiguration,
            "NoSuchPublicAccessBlockConfiguration" => Self::NoSuchPublicAccessBlockConfiguration,
            "NoSuchTagSet" => Self::NoSuchTagSet,
            "NoSuchUpload" => Self::NoSuchUpload,
            "NoSuchVersion" => Self::NoSuchVersion,
            "NoSuchWebsiteConfiguration" => Self::NoSuchWebsiteConfiguration,
            "NotImplemented" => Self::NotImplemented,
            "NotModified" => Self::NotModified,
            "ObjectNotInActiveTierError" => Self::ObjectNotInActiveTierError,
            "OwnershipControlsNotFoundError" => Self::OwnershipControlsNotFoundError,
            "PreconditionFailed" => Self::PreconditionFailed,
            "ReplicationConfigurationNotFoundError" => Self::ReplicationConfigurationNotFoundError,
            "RequestTimeTooSkewed" => Self::RequestTimeTooSkewed,
            "RequestTimeout" => Self::RequestTimeout,
            "RestoreAlreadyInProgress" => Self::RestoreAlreadyInProgress,
            "ServerSideEncryptionConfigurationNotFoundError" => {
                Self::ServerSideEncryptionConfigurationNotFoundError
            }
            "ServiceUnavailable" => Self::ServiceUnavailable,
            "SignatureDoesNotMatch" => Self::SignatureDoesNotMatch,
            "SlowDown" => Self::SlowDown,
            "TooManyBuckets" => Self::TooManyBuckets,
            "XAmzContentSHA256Mismatch" => Self::XAmzContentSHA256Mismatch,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::NotModified => http::StatusCode::NOT_MODIFIED,
            Self::BadDigest
            | Self::EntityTooLarge
            | Self::EntityTooSmall
            | Self::ExpiredToken
            | Self::InvalidArgument
            | Self::InvalidBucketName
            | Self::InvalidDigest
            | Self::InvalidLocationConstraint
            | Self::InvalidPart
            | Self::InvalidPartOrder
            | Self::InvalidRequest
            | Self::InvalidStorageClass
            | Self::InvalidToken
            | Self::KeyTooLongError
            | Self::MalformedXML
            | Self::MaxMessageLengthExceeded
            | Self::MetadataTooLarge
            | Self::RequestTimeout
            | Self::TooManyBuckets
            | Self::XAmzContentSHA256Mismatch => http::StatusCode::BAD_REQUEST,
            Self::AccessDenied
            | Self::AccountProblem
            | Self::InvalidAccessKeyId
            | Self::InvalidObjectState
            | Self::ObjectNotInActiveTierError
            | Self::RequestTimeTooSkewed
            | Self::SignatureDoesNotMatch => http::StatusCode::FORBIDDEN,
            Self::NoSuchBucket
            | Self::NoSuchBucketPolicy
            | Self::NoSuchCORSConfiguration
            | Self::NoSuchConfiguration
            | Self::NoSuchKey
            | Self::NoSuchLifecycleConfiguration
            | Self::NoSuchObjectLockConfiguration
            | Self::NoSuchPublicAccessBlockConfiguration
            | Self::NoSuchTagSet
            | Self::NoSuchUpload
            | Self::NoSuchVersion
            | Self::NoSuchWebsiteConfiguration
            | Self::OwnershipControlsNotFoundError
            | Self::ReplicationConfigurationNotFoundError
            | Self::ServerSideEncryptionConfigurationNotFoundError => http::StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::BucketAlreadyExists
            | Self::BucketAlreadyOwnedByYou
            | Self::BucketNotEmpty
            | Self::ConditionalRequestConflict
            | Self::InvalidBucketState
            | Self::RestoreAlreadyInProgress => http::StatusCode::CONFLICT,
            Self::MissingContentLength => http::StatusCode::LENGTH_REQUIRED,
            Self::PreconditionFailed => http::StatusCode::PRECONDITION_FAILED,
            Self::InvalidRange => http::StatusCode::RANGE_NOT_SATISFIABLE,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotImplemented => http::StatusCode::NOT_IMPLEMENTED,
            Self::ServiceUnavailable
            | Self::SlowDown => http::StatusCode::SERVICE_UNAVAILABLE,
            Self::Other(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error.
    #[must_use]
    pub fn default_message(&self) -> &str {
        match self {
            Self::AccessDenied => "Access Denied",
            Self::AccountProblem => "There is a problem with the account",
            Self::BadDigest => "The Content-MD5 you specified did not match what we received",
            Self::BucketAlreadyExists => "The requested bucket name is not available",
            Self::BucketAlreadyOwnedByYou => "The bucket is already owned by you",
            Self::BucketNotEmpty => "The bucket you tried to delete is not empty",
            Self::ConditionalRequestConflict => "The conditional request cannot be processed",
            Self::EntityTooLarge => "Your proposed upload exceeds the maximum allowed size",
            Self::EntityTooSmall => "Your proposed upload is smaller than the minimum allowed size",
            Self::ExpiredToken => "The provided token has expired",
            Self::InternalError => "Internal server error",
            Self::InvalidAccessKeyId => {
                "The access key Id you provided does not exist in our records"
            }
            Self::InvalidArgument => "Invalid Argument",
            Self::InvalidBucketName => "The specified bucket is not valid",
            Self::InvalidBucketState => {
                "The request is not valid with the current state of the bucket"
            }
            Self::InvalidDigest => "The Content-MD5 you specified is not valid",
            Self::InvalidLocationConstraint => "The specified location constraint is not valid",
            Self::InvalidObjectState => {
                "The operation is not valid for the current state of the object"
            }
            Self::InvalidPart => "One or more of the specified parts could not be found",
            Self::InvalidPartOrder => "The list of parts was not in ascending order",
            Self::InvalidRange => "The requested range cannot be satisfied",
            Self::InvalidRequest => "Invalid Request",
            Self::InvalidStorageClass => "The storage class you specified is not valid",
            Self::InvalidToken => "The provided token is malformed or otherwise invalid",
            Self::KeyTooLongError => "Your key is too long",
            Self::MalformedXML => "The XML you provided was not well-formed",
            Self::MaxMessageLengthExceeded => "Your request was too big",
            Self::MetadataTooLarge => {
                "Your metadata headers exceed the maximum allowed metadata size"
            }
            Self::MethodNotAllowed => "The specified method is not allowed against this resource",
            Self::MissingContentLength => "You must provide the Content-Length HTTP header",
            Self::NoSuchBucket => "The specified bucket does not exist",
            Self::NoSuchBucketPolicy => "The specified bucket does not have a bucket policy",
            Self::NoSuchCORSConfiguration => "The CORS configuration does not exist",
            Self::NoSuchConfiguration => "The specified configuration does not exist",
            Self::NoSuchKey => "The specified key does not exist",
            Self::NoSuchLifecycleConfiguration => "The lifecycle configuration does not exist",
            Self::NoSuchObjectLockConfiguration => {
                "Object Lock configuration does not exist for this bucket"
            }
            Self::NoSuchPublicAccessBlockConfiguration => {
                "The public access block configuration was not found"
            }
            Self::NoSuchTagSet => "The TagSet does not exist",
            Self::NoSuchUpload => "The specified multipart upload does not exist",
            Self::NoSuchVersion => "The specified version does not exist",
            Self::NoSuchWebsiteConfiguration => "The website configuration does not exist",
            Self::NotImplemented => "The functionality is not implemented",
            Self::NotModified => "Not Modified",
            Self::ObjectNotInActiveTierError => {
                "The source object of the COPY operation is not in the active tier"
            }
            Self::OwnershipControlsNotFoundError => "The bucket ownership controls were not found",
            Self::PreconditionFailed => {
                "At least one of the preconditions you specified did not hold"
            }
            Self::ReplicationConfigurationNotFoundError => {
                "The replication configuration was not found"
            }
            Self::RequestTimeTooSkewed => {
                "The difference between the request time and the server's time is too large"
            }
            Self::RequestTimeout => {
                "Your socket connection to the server was not read from or written to within the timeout period"
            }
            Self::RestoreAlreadyInProgress => "Object restore is already in progress",
            Self::ServerSideEncryptionConfigurationNotFoundError => {
                "The server-side encryption configuration was not found"
            }
            Self::ServiceUnavailable => "Reduce your request rate",
            Self::SignatureDoesNotMatch => "The request signature does not match",
            Self::SlowDown => "Please reduce your request rate",
            Self::TooManyBuckets => "You have attempted to create more buckets than allowed",
            Self::XAmzContentSHA256Mismatch => {
                "The provided x-amz-content-sha256 header does not match"
            }
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for S3ErrorCode {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}
