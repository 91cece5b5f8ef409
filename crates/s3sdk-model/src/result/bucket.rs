//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::{Bucket, BucketLocationConstraint, LocationType, Owner};

/// Result of the `CreateBucket` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBucketResult {
    /// Header `x-amz-bucket-arn`.
    pub bucket_arn: Option<String>,
    /// Header `Location`.
    pub location: Option<String>,
}

impl CreateBucketResult {
    #[must_use]
    pub fn bucket_arn(&self) -> Option<&str> {
        self.bucket_arn.as_deref()
    }

    #[must_use]
    pub fn with_bucket_arn(mut self, bucket_arn: impl Into<String>) -> Self {
        self.bucket_arn = Some(bucket_arn.into());
        self
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Result of the `GetBucketLocation` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketLocationResult {
    pub location_constraint: Option<BucketLocationConstraint>,
}

impl GetBucketLocationResult {
    #[must_use]
    pub fn location_constraint(&self) -> Option<BucketLocationConstraint> {
        self.location_constraint
    }

    #[must_use]
    pub fn with_location_constraint(
        mut self,
        location_constraint: BucketLocationConstraint,
    ) -> Self {
        self.location_constraint = Some(location_constraint);
        self
    }
}

/// Result of the `HeadBucket` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadBucketResult {
    /// Header `x-amz-access-point-alias`.
    pub access_point_alias: Option<bool>,
    /// Header `x-amz-bucket-arn`.
    pub bucket_arn: Option<String>,
    /// Header `x-amz-bucket-location-name`.
    pub bucket_location_name: Option<String>,
    /// Header `x-amz-bucket-location-type`.
    pub bucket_location_type: Option<LocationType>,
    /// Header `x-amz-bucket-region`.
    pub bucket_region: Option<String>,
}

impl HeadBucketResult {
    #[must_use]
    pub fn access_point_alias(&self) -> Option<bool> {
        self.access_point_alias
    }

    #[must_use]
    pub fn with_access_point_alias(mut self, access_point_alias: bool) -> Self {
        self.access_point_alias = Some(access_point_alias);
        self
    }

    #[must_use]
    pub fn bucket_arn(&self) -> Option<&str> {
        self.bucket_arn.as_deref()
    }

    #[must_use]
    pub fn with_bucket_arn(mut self, bucket_arn: impl Into<String>) -> Self {
        self.bucket_arn = Some(bucket_arn.into());
        self
    }

    #[must_use]
    pub fn bucket_location_name(&self) -> Option<&str> {
        self.bucket_location_name.as_deref()
    }

    #[must_use]
    pub fn with_bucket_location_name(mut self, bucket_location_name: impl Into<String>) -> Self {
        self.bucket_location_name = Some(bucket_location_name.into());
        self
    }

    #[must_use]
    pub fn bucket_location_type(&self) -> Option<LocationType> {
        self.bucket_location_type
    }

    #[must_use]
    pub fn with_bucket_location_type(mut self, bucket_location_type: LocationType) -> Self {
        self.bucket_location_type = Some(bucket_location_type);
        self
    }

    #[must_use]
    pub fn bucket_region(&self) -> Option<&str> {
        self.bucket_region.as_deref()
    }

    #[must_use]
    pub fn with_bucket_region(mut self, bucket_region: impl Into<String>) -> Self {
        self.bucket_region = Some(bucket_region.into());
        self
    }
}

/// Result of the `ListBuckets` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketsResult {
    pub buckets: Vec<Bucket>,
    pub continuation_token: Option<String>,
    pub owner: Option<Owner>,
    pub prefix: Option<String>,
}

impl ListBucketsResult {
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    #[must_use]
    pub fn with_buckets(mut self, buckets: impl IntoIterator<Item = Bucket>) -> Self {
        self.buckets = buckets.into_iter().collect();
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
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
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
