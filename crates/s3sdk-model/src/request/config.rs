//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use std::fmt;

use crate::types::{
    SENSITIVE_DATA_REDACTED, AccelerateConfiguration, AccessControlPolicy, BucketCannedACL,
    BucketLifecycleConfiguration, BucketLoggingStatus, CORSConfiguration, ChecksumAlgorithm,
    NotificationConfiguration, ObjectAttributes, ObjectCannedACL, ObjectLockConfiguration,
    ObjectLockLegalHold, ObjectLockRetention, OwnershipControls, PublicAccessBlockConfiguration,
    ReplicationConfiguration, RequestPayer, RequestPaymentConfiguration,
    ServerSideEncryptionConfiguration, Tagging, TransitionDefaultMinimumObjectSize,
    VersioningConfiguration, WebsiteConfiguration,
};

/// Request parameters for the `DeleteBucketCors` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketCorsRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketCorsRequest {
    /// Creates a `DeleteBucketCorsRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `DeleteBucketEncryption` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketEncryptionRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketEncryptionRequest {
    /// Creates a `DeleteBucketEncryptionRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `DeleteBucketLifecycle` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketLifecycleRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketLifecycleRequest {
    /// Creates a `DeleteBucketLifecycleRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `DeleteBucketOwnershipControls` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketOwnershipControlsRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketOwnershipControlsRequest {
    /// Creates a `DeleteBucketOwnershipControlsRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `DeleteBucketPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketPolicyRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketPolicyRequest {
    /// Creates a `DeleteBucketPolicyRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `DeleteBucketReplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketReplicationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketReplicationRequest {
    /// Creates a `DeleteBucketReplicationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `DeleteBucketTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketTaggingRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketTaggingRequest {
    /// Creates a `DeleteBucketTaggingRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `DeleteBucketWebsite` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketWebsiteRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketWebsiteRequest {
    /// Creates a `DeleteBucketWebsiteRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `DeleteObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectTaggingRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl DeleteObjectTaggingRequest {
    /// Creates a `DeleteObjectTaggingRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `DeletePublicAccessBlock` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePublicAccessBlockRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeletePublicAccessBlockRequest {
    /// Creates a `DeletePublicAccessBlockRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketAccelerateConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketAccelerateConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
}

impl GetBucketAccelerateConfigurationRequest {
    /// Creates a `GetBucketAccelerateConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }
}

/// Request parameters for the `GetBucketAcl` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketAclRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketAclRequest {
    /// Creates a `GetBucketAclRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketCors` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketCorsRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketCorsRequest {
    /// Creates a `GetBucketCorsRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketEncryption` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketEncryptionRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketEncryptionRequest {
    /// Creates a `GetBucketEncryptionRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketLifecycleConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketLifecycleConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketLifecycleConfigurationRequest {
    /// Creates a `GetBucketLifecycleConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketLogging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketLoggingRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketLoggingRequest {
    /// Creates a `GetBucketLoggingRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketNotificationConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketNotificationConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketNotificationConfigurationRequest {
    /// Creates a `GetBucketNotificationConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketOwnershipControls` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketOwnershipControlsRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketOwnershipControlsRequest {
    /// Creates a `GetBucketOwnershipControlsRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketPolicyRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketPolicyRequest {
    /// Creates a `GetBucketPolicyRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketPolicyStatus` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketPolicyStatusRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketPolicyStatusRequest {
    /// Creates a `GetBucketPolicyStatusRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketReplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketReplicationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketReplicationRequest {
    /// Creates a `GetBucketReplicationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketRequestPayment` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketRequestPaymentRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketRequestPaymentRequest {
    /// Creates a `GetBucketRequestPaymentRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketTaggingRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketTaggingRequest {
    /// Creates a `GetBucketTaggingRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketVersioning` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketVersioningRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketVersioningRequest {
    /// Creates a `GetBucketVersioningRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetBucketWebsite` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketWebsiteRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketWebsiteRequest {
    /// Creates a `GetBucketWebsiteRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetObjectAcl` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectAclRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectAclRequest {
    /// Creates a `GetObjectAclRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `GetObjectAttributes` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GetObjectAttributesRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-max-parts`.
    pub max_parts: Option<i32>,
    /// Header `x-amz-object-attributes`.
    pub object_attributes: Vec<ObjectAttributes>,
    /// Header `x-amz-part-number-marker`.
    pub part_number_marker: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectAttributesRequest {
    /// Creates a `GetObjectAttributesRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn max_parts(&self) -> Option<i32> {
        self.max_parts
    }

    #[must_use]
    pub fn with_max_parts(mut self, max_parts: i32) -> Self {
        self.max_parts = Some(max_parts);
        self
    }

    #[must_use]
    pub fn object_attributes(&self) -> &[ObjectAttributes] {
        &self.object_attributes
    }

    #[must_use]
    pub fn with_object_attributes(
        mut self,
        object_attributes: impl IntoIterator<Item = ObjectAttributes>,
    ) -> Self {
        self.object_attributes = object_attributes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn part_number_marker(&self) -> Option<&str> {
        self.part_number_marker.as_deref()
    }

    #[must_use]
    pub fn with_part_number_marker(mut self, part_number_marker: impl Into<String>) -> Self {
        self.part_number_marker = Some(part_number_marker.into());
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn sse_customer_algorithm(&self) -> Option<&str> {
        self.sse_customer_algorithm.as_deref()
    }

    #[must_use]
    pub fn with_sse_customer_algorithm(
        mut self,
        sse_customer_algorithm: impl Into<String>,
    ) -> Self {
        self.sse_customer_algorithm = Some(sse_customer_algorithm.into());
        self
    }

    #[must_use]
    pub fn sse_customer_key(&self) -> Option<&str> {
        self.sse_customer_key.as_deref()
    }

    #[must_use]
    pub fn with_sse_customer_key(mut self, sse_customer_key: impl Into<String>) -> Self {
        self.sse_customer_key = Some(sse_customer_key.into());
        self
    }

    #[must_use]
    pub fn sse_customer_key_md5(&self) -> Option<&str> {
        self.sse_customer_key_md5.as_deref()
    }

    #[must_use]
    pub fn with_sse_customer_key_md5(mut self, sse_customer_key_md5: impl Into<String>) -> Self {
        self.sse_customer_key_md5 = Some(sse_customer_key_md5.into());
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

impl fmt::Debug for GetObjectAttributesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetObjectAttributesRequest")
            .field("bucket", &self.bucket)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("key", &self.key)
            .field("max_parts", &self.max_parts)
            .field("object_attributes", &self.object_attributes)
            .field("part_number_marker", &self.part_number_marker)
            .field("request_payer", &self.request_payer)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field(
                "sse_customer_key",
                &self.sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("version_id", &self.version_id)
            .finish()
    }
}

/// Request parameters for the `GetObjectLegalHold` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectLegalHoldRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectLegalHoldRequest {
    /// Creates a `GetObjectLegalHoldRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `GetObjectLockConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectLockConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetObjectLockConfigurationRequest {
    /// Creates a `GetObjectLockConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `GetObjectRetention` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectRetentionRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectRetentionRequest {
    /// Creates a `GetObjectRetentionRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `GetObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectTaggingRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectTaggingRequest {
    /// Creates a `GetObjectTaggingRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `GetPublicAccessBlock` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPublicAccessBlockRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetPublicAccessBlockRequest {
    /// Creates a `GetPublicAccessBlockRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `PutBucketAccelerateConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketAccelerateConfigurationRequest {
    /// Request body.
    pub accelerate_configuration: AccelerateConfiguration,
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl PutBucketAccelerateConfigurationRequest {
    /// Creates a `PutBucketAccelerateConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(
        accelerate_configuration: AccelerateConfiguration,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            accelerate_configuration,
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn accelerate_configuration(&self) -> &AccelerateConfiguration {
        &self.accelerate_configuration
    }

    #[must_use]
    pub fn with_accelerate_configuration(
        mut self,
        accelerate_configuration: AccelerateConfiguration,
    ) -> Self {
        self.accelerate_configuration = accelerate_configuration;
        self
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `PutBucketAcl` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketAclRequest {
    /// Header `x-amz-acl`.
    pub acl: Option<BucketCannedACL>,
    /// Request body.
    pub access_control_policy: Option<AccessControlPolicy>,
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// Header `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// Header `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// Header `x-amz-grant-write`.
    pub grant_write: Option<String>,
    /// Header `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
}

impl PutBucketAclRequest {
    /// Creates a `PutBucketAclRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn acl(&self) -> Option<BucketCannedACL> {
        self.acl
    }

    #[must_use]
    pub fn with_acl(mut self, acl: BucketCannedACL) -> Self {
        self.acl = Some(acl);
        self
    }

    #[must_use]
    pub fn access_control_policy(&self) -> Option<&AccessControlPolicy> {
        self.access_control_policy.as_ref()
    }

    #[must_use]
    pub fn with_access_control_policy(
        mut self,
        access_control_policy: AccessControlPolicy,
    ) -> Self {
        self.access_control_policy = Some(access_control_policy);
        self
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn grant_full_control(&self) -> Option<&str> {
        self.grant_full_control.as_deref()
    }

    #[must_use]
    pub fn with_grant_full_control(mut self, grant_full_control: impl Into<String>) -> Self {
        self.grant_full_control = Some(grant_full_control.into());
        self
    }

    #[must_use]
    pub fn grant_read(&self) -> Option<&str> {
        self.grant_read.as_deref()
    }

    #[must_use]
    pub fn with_grant_read(mut self, grant_read: impl Into<String>) -> Self {
        self.grant_read = Some(grant_read.into());
        self
    }

    #[must_use]
    pub fn grant_read_acp(&self) -> Option<&str> {
        self.grant_read_acp.as_deref()
    }

    #[must_use]
    pub fn with_grant_read_acp(mut self, grant_read_acp: impl Into<String>) -> Self {
        self.grant_read_acp = Some(grant_read_acp.into());
        self
    }

    #[must_use]
    pub fn grant_write(&self) -> Option<&str> {
        self.grant_write.as_deref()
    }

    #[must_use]
    pub fn with_grant_write(mut self, grant_write: impl Into<String>) -> Self {
        self.grant_write = Some(grant_write.into());
        self
    }

    #[must_use]
    pub fn grant_write_acp(&self) -> Option<&str> {
        self.grant_write_acp.as_deref()
    }

    #[must_use]
    pub fn with_grant_write_acp(mut self, grant_write_acp: impl Into<String>) -> Self {
        self.grant_write_acp = Some(grant_write_acp.into());
        self
    }
}

/// Request parameters for the `PutBucketCors` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketCorsRequest {
    /// URI path label.
    pub bucket: String,
    /// Request body.
    pub cors_configuration: CORSConfiguration,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl PutBucketCorsRequest {
    /// Creates a `PutBucketCorsRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, cors_configuration: CORSConfiguration) -> Self {
        Self {
            bucket: bucket.into(),
            cors_configuration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn cors_configuration(&self) -> &CORSConfiguration {
        &self.cors_configuration
    }

    #[must_use]
    pub fn with_cors_configuration(mut self, cors_configuration: CORSConfiguration) -> Self {
        self.cors_configuration = cors_configuration;
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `PutBucketEncryption` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketEncryptionRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub server_side_encryption_configuration: ServerSideEncryptionConfiguration,
}

impl PutBucketEncryptionRequest {
    /// Creates a `PutBucketEncryptionRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        server_side_encryption_configuration: ServerSideEncryptionConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            server_side_encryption_configuration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn server_side_encryption_configuration(&self) -> &ServerSideEncryptionConfiguration {
        &self.server_side_encryption_configuration
    }

    #[must_use]
    pub fn with_server_side_encryption_configuration(
        mut self,
        server_side_encryption_configuration: ServerSideEncryptionConfiguration,
    ) -> Self {
        self.server_side_encryption_configuration = server_side_encryption_configuration;
        self
    }
}

/// Request parameters for the `PutBucketLifecycleConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketLifecycleConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub lifecycle_configuration: Option<BucketLifecycleConfiguration>,
    /// Header `x-amz-transition-default-minimum-object-size`.
    pub transition_default_minimum_object_size: Option<TransitionDefaultMinimumObjectSize>,
}

impl PutBucketLifecycleConfigurationRequest {
    /// Creates a `PutBucketLifecycleConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn lifecycle_configuration(&self) -> Option<&BucketLifecycleConfiguration> {
        self.lifecycle_configuration.as_ref()
    }

    #[must_use]
    pub fn with_lifecycle_configuration(
        mut self,
        lifecycle_configuration: BucketLifecycleConfiguration,
    ) -> Self {
        self.lifecycle_configuration = Some(lifecycle_configuration);
        self
    }

    #[must_use]
    pub fn transition_default_minimum_object_size(
        &self,
    ) -> Option<TransitionDefaultMinimumObjectSize> {
        self.transition_default_minimum_object_size
    }

    #[must_use]
    pub fn with_transition_default_minimum_object_size(
        mut self,
        transition_default_minimum_object_size: TransitionDefaultMinimumObjectSize,
    ) -> Self {
        self.transition_default_minimum_object_size = Some(transition_default_minimum_object_size);
        self
    }
}

/// Request parameters for the `PutBucketLogging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketLoggingRequest {
    /// URI path label.
    pub bucket: String,
    /// Request body.
    pub bucket_logging_status: BucketLoggingStatus,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl PutBucketLoggingRequest {
    /// Creates a `PutBucketLoggingRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, bucket_logging_status: BucketLoggingStatus) -> Self {
        Self {
            bucket: bucket.into(),
            bucket_logging_status,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn bucket_logging_status(&self) -> &BucketLoggingStatus {
        &self.bucket_logging_status
    }

    #[must_use]
    pub fn with_bucket_logging_status(
        mut self,
        bucket_logging_status: BucketLoggingStatus,
    ) -> Self {
        self.bucket_logging_status = bucket_logging_status;
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `PutBucketNotificationConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketNotificationConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub notification_configuration: NotificationConfiguration,
    /// Header `x-amz-skip-destination-validation`.
    pub skip_destination_validation: Option<bool>,
}

impl PutBucketNotificationConfigurationRequest {
    /// Creates a `PutBucketNotificationConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        notification_configuration: NotificationConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            notification_configuration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn notification_configuration(&self) -> &NotificationConfiguration {
        &self.notification_configuration
    }

    #[must_use]
    pub fn with_notification_configuration(
        mut self,
        notification_configuration: NotificationConfiguration,
    ) -> Self {
        self.notification_configuration = notification_configuration;
        self
    }

    #[must_use]
    pub fn skip_destination_validation(&self) -> Option<bool> {
        self.skip_destination_validation
    }

    #[must_use]
    pub fn with_skip_destination_validation(mut self, skip_destination_validation: bool) -> Self {
        self.skip_destination_validation = Some(skip_destination_validation);
        self
    }
}

/// Request parameters for the `PutBucketOwnershipControls` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketOwnershipControlsRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub ownership_controls: OwnershipControls,
}

impl PutBucketOwnershipControlsRequest {
    /// Creates a `PutBucketOwnershipControlsRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, ownership_controls: OwnershipControls) -> Self {
        Self {
            bucket: bucket.into(),
            ownership_controls,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn ownership_controls(&self) -> &OwnershipControls {
        &self.ownership_controls
    }

    #[must_use]
    pub fn with_ownership_controls(mut self, ownership_controls: OwnershipControls) -> Self {
        self.ownership_controls = ownership_controls;
        self
    }
}

/// Request parameters for the `PutBucketPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketPolicyRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `x-amz-confirm-remove-self-bucket-access`.
    pub confirm_remove_self_bucket_access: Option<bool>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub policy: String,
}

impl PutBucketPolicyRequest {
    /// Creates a `PutBucketPolicyRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, policy: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            policy: policy.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn confirm_remove_self_bucket_access(&self) -> Option<bool> {
        self.confirm_remove_self_bucket_access
    }

    #[must_use]
    pub fn with_confirm_remove_self_bucket_access(
        mut self,
        confirm_remove_self_bucket_access: bool,
    ) -> Self {
        self.confirm_remove_self_bucket_access = Some(confirm_remove_self_bucket_access);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn policy(&self) -> &str {
        &self.policy
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = policy.into();
        self
    }
}

/// Request parameters for the `PutBucketReplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketReplicationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub replication_configuration: ReplicationConfiguration,
    /// Header `x-amz-bucket-object-lock-token`.
    pub token: Option<String>,
}

impl PutBucketReplicationRequest {
    /// Creates a `PutBucketReplicationRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        replication_configuration: ReplicationConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            replication_configuration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn replication_configuration(&self) -> &ReplicationConfiguration {
        &self.replication_configuration
    }

    #[must_use]
    pub fn with_replication_configuration(
        mut self,
        replication_configuration: ReplicationConfiguration,
    ) -> Self {
        self.replication_configuration = replication_configuration;
        self
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Request parameters for the `PutBucketRequestPayment` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketRequestPaymentRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub request_payment_configuration: RequestPaymentConfiguration,
}

impl PutBucketRequestPaymentRequest {
    /// Creates a `PutBucketRequestPaymentRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        request_payment_configuration: RequestPaymentConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            request_payment_configuration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn request_payment_configuration(&self) -> &RequestPaymentConfiguration {
        &self.request_payment_configuration
    }

    #[must_use]
    pub fn with_request_payment_configuration(
        mut self,
        request_payment_configuration: RequestPaymentConfiguration,
    ) -> Self {
        self.request_payment_configuration = request_payment_configuration;
        self
    }
}

/// Request parameters for the `PutBucketTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketTaggingRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub tagging: Tagging,
}

impl PutBucketTaggingRequest {
    /// Creates a `PutBucketTaggingRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, tagging: Tagging) -> Self {
        Self {
            bucket: bucket.into(),
            tagging,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn tagging(&self) -> &Tagging {
        &self.tagging
    }

    #[must_use]
    pub fn with_tagging(mut self, tagging: Tagging) -> Self {
        self.tagging = tagging;
        self
    }
}

/// Request parameters for the `PutBucketVersioning` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketVersioningRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `x-amz-mfa`.
    pub mfa: Option<String>,
    /// Request body.
    pub versioning_configuration: VersioningConfiguration,
}

impl PutBucketVersioningRequest {
    /// Creates a `PutBucketVersioningRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        versioning_configuration: VersioningConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            versioning_configuration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn mfa(&self) -> Option<&str> {
        self.mfa.as_deref()
    }

    #[must_use]
    pub fn with_mfa(mut self, mfa: impl Into<String>) -> Self {
        self.mfa = Some(mfa.into());
        self
    }

    #[must_use]
    pub fn versioning_configuration(&self) -> &VersioningConfiguration {
        &self.versioning_configuration
    }

    #[must_use]
    pub fn with_versioning_configuration(
        mut self,
        versioning_configuration: VersioningConfiguration,
    ) -> Self {
        self.versioning_configuration = versioning_configuration;
        self
    }
}

/// Request parameters for the `PutBucketWebsite` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketWebsiteRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub website_configuration: WebsiteConfiguration,
}

impl PutBucketWebsiteRequest {
    /// Creates a `PutBucketWebsiteRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, website_configuration: WebsiteConfiguration) -> Self {
        Self {
            bucket: bucket.into(),
            website_configuration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn website_configuration(&self) -> &WebsiteConfiguration {
        &self.website_configuration
    }

    #[must_use]
    pub fn with_website_configuration(
        mut self,
        website_configuration: WebsiteConfiguration,
    ) -> Self {
        self.website_configuration = website_configuration;
        self
    }
}

/// Request parameters for the `PutObjectAcl` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectAclRequest {
    /// Header `x-amz-acl`.
    pub acl: Option<ObjectCannedACL>,
    /// Request body.
    pub access_control_policy: Option<AccessControlPolicy>,
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// Header `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// Header `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// Header `x-amz-grant-write`.
    pub grant_write: Option<String>,
    /// Header `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl PutObjectAclRequest {
    /// Creates a `PutObjectAclRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn acl(&self) -> Option<ObjectCannedACL> {
        self.acl
    }

    #[must_use]
    pub fn with_acl(mut self, acl: ObjectCannedACL) -> Self {
        self.acl = Some(acl);
        self
    }

    #[must_use]
    pub fn access_control_policy(&self) -> Option<&AccessControlPolicy> {
        self.access_control_policy.as_ref()
    }

    #[must_use]
    pub fn with_access_control_policy(
        mut self,
        access_control_policy: AccessControlPolicy,
    ) -> Self {
        self.access_control_policy = Some(access_control_policy);
        self
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn grant_full_control(&self) -> Option<&str> {
        self.grant_full_control.as_deref()
    }

    #[must_use]
    pub fn with_grant_full_control(mut self, grant_full_control: impl Into<String>) -> Self {
        self.grant_full_control = Some(grant_full_control.into());
        self
    }

    #[must_use]
    pub fn grant_read(&self) -> Option<&str> {
        self.grant_read.as_deref()
    }

    #[must_use]
    pub fn with_grant_read(mut self, grant_read: impl Into<String>) -> Self {
        self.grant_read = Some(grant_read.into());
        self
    }

    #[must_use]
    pub fn grant_read_acp(&self) -> Option<&str> {
        self.grant_read_acp.as_deref()
    }

    #[must_use]
    pub fn with_grant_read_acp(mut self, grant_read_acp: impl Into<String>) -> Self {
        self.grant_read_acp = Some(grant_read_acp.into());
        self
    }

    #[must_use]
    pub fn grant_write(&self) -> Option<&str> {
        self.grant_write.as_deref()
    }

    #[must_use]
    pub fn with_grant_write(mut self, grant_write: impl Into<String>) -> Self {
        self.grant_write = Some(grant_write.into());
        self
    }

    #[must_use]
    pub fn grant_write_acp(&self) -> Option<&str> {
        self.grant_write_acp.as_deref()
    }

    #[must_use]
    pub fn with_grant_write_acp(mut self, grant_write_acp: impl Into<String>) -> Self {
        self.grant_write_acp = Some(grant_write_acp.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `PutObjectLegalHold` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectLegalHoldRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Request body.
    pub legal_hold: Option<ObjectLockLegalHold>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl PutObjectLegalHoldRequest {
    /// Creates a `PutObjectLegalHoldRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn legal_hold(&self) -> Option<&ObjectLockLegalHold> {
        self.legal_hold.as_ref()
    }

    #[must_use]
    pub fn with_legal_hold(mut self, legal_hold: ObjectLockLegalHold) -> Self {
        self.legal_hold = Some(legal_hold);
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `PutObjectLockConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectLockConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub object_lock_configuration: Option<ObjectLockConfiguration>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Header `x-amz-bucket-object-lock-token`.
    pub token: Option<String>,
}

impl PutObjectLockConfigurationRequest {
    /// Creates a `PutObjectLockConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn object_lock_configuration(&self) -> Option<&ObjectLockConfiguration> {
        self.object_lock_configuration.as_ref()
    }

    #[must_use]
    pub fn with_object_lock_configuration(
        mut self,
        object_lock_configuration: ObjectLockConfiguration,
    ) -> Self {
        self.object_lock_configuration = Some(object_lock_configuration);
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Request parameters for the `PutObjectRetention` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectRetentionRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-bypass-governance-retention`.
    pub bypass_governance_retention: Option<bool>,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Request body.
    pub retention: Option<ObjectLockRetention>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl PutObjectRetentionRequest {
    /// Creates a `PutObjectRetentionRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn bypass_governance_retention(&self) -> Option<bool> {
        self.bypass_governance_retention
    }

    #[must_use]
    pub fn with_bypass_governance_retention(mut self, bypass_governance_retention: bool) -> Self {
        self.bypass_governance_retention = Some(bypass_governance_retention);
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn retention(&self) -> Option<&ObjectLockRetention> {
        self.retention.as_ref()
    }

    #[must_use]
    pub fn with_retention(mut self, retention: ObjectLockRetention) -> Self {
        self.retention = Some(retention);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `PutObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectTaggingRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Request body.
    pub tagging: Tagging,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl PutObjectTaggingRequest {
    /// Creates a `PutObjectTaggingRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, tagging: Tagging) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            tagging,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }

    #[must_use]
    pub fn tagging(&self) -> &Tagging {
        &self.tagging
    }

    #[must_use]
    pub fn with_tagging(mut self, tagging: Tagging) -> Self {
        self.tagging = tagging;
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Request parameters for the `PutPublicAccessBlock` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutPublicAccessBlockRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Request body.
    pub public_access_block_configuration: PublicAccessBlockConfiguration,
}

impl PutPublicAccessBlockRequest {
    /// Creates a `PutPublicAccessBlockRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        public_access_block_configuration: PublicAccessBlockConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            public_access_block_configuration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    #[must_use]
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    #[must_use]
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn public_access_block_configuration(&self) -> &PublicAccessBlockConfiguration {
        &self.public_access_block_configuration
    }

    #[must_use]
    pub fn with_public_access_block_configuration(
        mut self,
        public_access_block_configuration: PublicAccessBlockConfiguration,
    ) -> Self {
        self.public_access_block_configuration = public_access_block_configuration;
        self
    }
}
