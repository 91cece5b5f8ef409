//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::{BucketCannedACL, CreateBucketConfiguration, ObjectOwnership};

/// Request parameters for the `CreateBucket` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBucketRequest {
    /// Header `x-amz-acl`.
    pub acl: Option<BucketCannedACL>,
    /// URI path label.
    pub bucket: String,
    /// Request body.
    pub create_bucket_configuration: Option<CreateBucketConfiguration>,
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
    /// Header `x-amz-bucket-object-lock-enabled`.
    pub object_lock_enabled_for_bucket: Option<bool>,
    /// Header `x-amz-object-ownership`.
    pub object_ownership: Option<ObjectOwnership>,
}

impl CreateBucketRequest {
    /// Creates a `CreateBucketRequest` from its required members.
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
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn create_bucket_configuration(&self) -> Option<&CreateBucketConfiguration> {
        self.create_bucket_configuration.as_ref()
    }

    #[must_use]
    pub fn with_create_bucket_configuration(
        mut self,
        create_bucket_configuration: CreateBucketConfiguration,
    ) -> Self {
        self.create_bucket_configuration = Some(create_bucket_configuration);
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
    pub fn object_lock_enabled_for_bucket(&self) -> Option<bool> {
        self.object_lock_enabled_for_bucket
    }

    #[must_use]
    pub fn with_object_lock_enabled_for_bucket(
        mut self,
        object_lock_enabled_for_bucket: bool,
    ) -> Self {
        self.object_lock_enabled_for_bucket = Some(object_lock_enabled_for_bucket);
        self
    }

    #[must_use]
    pub fn object_ownership(&self) -> Option<ObjectOwnership> {
        self.object_ownership
    }

    #[must_use]
    pub fn with_object_ownership(mut self, object_ownership: ObjectOwnership) -> Self {
        self.object_ownership = Some(object_ownership);
        self
    }
}

/// Request parameters for the `DeleteBucket` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketRequest {
    /// Creates a `DeleteBucketRequest` from its required members.
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

/// Request parameters for the `GetBucketLocation` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketLocationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketLocationRequest {
    /// Creates a `GetBucketLocationRequest` from its required members.
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

/// Request parameters for the `HeadBucket` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadBucketRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl HeadBucketRequest {
    /// Creates a `HeadBucketRequest` from its required members.
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

/// Request parameters for the `ListBuckets` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketsRequest {
    /// Query parameter `bucket-region`.
    pub bucket_region: Option<String>,
    /// Query parameter `continuation-token`.
    pub continuation_token: Option<String>,
    /// Query parameter `max-buckets`.
    pub max_buckets: Option<i32>,
    /// Query parameter `prefix`.
    pub prefix: Option<String>,
}

impl ListBucketsRequest {
    #[must_use]
    pub fn bucket_region(&self) -> Option<&str> {
        self.bucket_region.as_deref()
    }

    #[must_use]
    pub fn with_bucket_region(mut self, bucket_region: impl Into<String>) -> Self {
        self.bucket_region = Some(bucket_region.into());
        self
    }

    #[must_use]
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }

    #[must_use]
    pub fn with_continuation_token(mut self, continuation_token: impl Into<String>) -> Self {
        self.continuation_token = Some(continuation_token.into());
        self
    }

    #[must_use]
    pub fn max_buckets(&self) -> Option<i32> {
        self.max_buckets
    }

    #[must_use]
    pub fn with_max_buckets(mut self, max_buckets: i32) -> Self {
        self.max_buckets = Some(max_buckets);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}
