//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::{EncodingType, OptionalObjectAttributes, RequestPayer};

/// Request parameters for the `ListObjectVersions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectVersionsRequest {
    /// URI path label.
    pub bucket: String,
    /// Query parameter `delimiter`.
    pub delimiter: Option<String>,
    /// Query parameter `encoding-type`.
    pub encoding_type: Option<EncodingType>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `key-marker`.
    pub key_marker: Option<String>,
    /// Query parameter `max-keys`.
    pub max_keys: Option<i32>,
    /// Header `x-amz-optional-object-attributes`.
    pub optional_object_attributes: Vec<OptionalObjectAttributes>,
    /// Query parameter `prefix`.
    pub prefix: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `version-id-marker`.
    pub version_id_marker: Option<String>,
}

impl ListObjectVersionsRequest {
    /// Creates a `ListObjectVersionsRequest` from its required members.
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
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    #[must_use]
    pub fn encoding_type(&self) -> Option<EncodingType> {
        self.encoding_type
    }

    #[must_use]
    pub fn with_encoding_type(mut self, encoding_type: EncodingType) -> Self {
        self.encoding_type = Some(encoding_type);
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
    pub fn key_marker(&self) -> Option<&str> {
        self.key_marker.as_deref()
    }

    #[must_use]
    pub fn with_key_marker(mut self, key_marker: impl Into<String>) -> Self {
        self.key_marker = Some(key_marker.into());
        self
    }

    #[must_use]
    pub fn max_keys(&self) -> Option<i32> {
        self.max_keys
    }

    #[must_use]
    pub fn with_max_keys(mut self, max_keys: i32) -> Self {
        self.max_keys = Some(max_keys);
        self
    }

    #[must_use]
    pub fn optional_object_attributes(&self) -> &[OptionalObjectAttributes] {
        &self.optional_object_attributes
    }

    #[must_use]
    pub fn with_optional_object_attributes(
        mut self,
        optional_object_attributes: impl IntoIterator<Item = OptionalObjectAttributes>,
    ) -> Self {
        self.optional_object_attributes = optional_object_attributes.into_iter().collect();
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
    pub fn version_id_marker(&self) -> Option<&str> {
        self.version_id_marker.as_deref()
    }

    #[must_use]
    pub fn with_version_id_marker(mut self, version_id_marker: impl Into<String>) -> Self {
        self.version_id_marker = Some(version_id_marker.into());
        self
    }
}

/// Request parameters for the `ListObjects` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectsRequest {
    /// URI path label.
    pub bucket: String,
    /// Query parameter `delimiter`.
    pub delimiter: Option<String>,
    /// Query parameter `encoding-type`.
    pub encoding_type: Option<EncodingType>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `marker`.
    pub marker: Option<String>,
    /// Query parameter `max-keys`.
    pub max_keys: Option<i32>,
    /// Header `x-amz-optional-object-attributes`.
    pub optional_object_attributes: Vec<OptionalObjectAttributes>,
    /// Query parameter `prefix`.
    pub prefix: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
}

impl ListObjectsRequest {
    /// Creates a `ListObjectsRequest` from its required members.
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
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    #[must_use]
    pub fn encoding_type(&self) -> Option<EncodingType> {
        self.encoding_type
    }

    #[must_use]
    pub fn with_encoding_type(mut self, encoding_type: EncodingType) -> Self {
        self.encoding_type = Some(encoding_type);
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
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    #[must_use]
    pub fn max_keys(&self) -> Option<i32> {
        self.max_keys
    }

    #[must_use]
    pub fn with_max_keys(mut self, max_keys: i32) -> Self {
        self.max_keys = Some(max_keys);
        self
    }

    #[must_use]
    pub fn optional_object_attributes(&self) -> &[OptionalObjectAttributes] {
        &self.optional_object_attributes
    }

    #[must_use]
    pub fn with_optional_object_attributes(
        mut self,
        optional_object_attributes: impl IntoIterator<Item = OptionalObjectAttributes>,
    ) -> Self {
        self.optional_object_attributes = optional_object_attributes.into_iter().collect();
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

/// Request parameters for the `ListObjectsV2` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectsV2Request {
    /// URI path label.
    pub bucket: String,
    /// Query parameter `continuation-token`.
    pub continuation_token: Option<String>,
    /// Query parameter `delimiter`.
    pub delimiter: Option<String>,
    /// Query parameter `encoding-type`.
    pub encoding_type: Option<EncodingType>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `fetch-owner`.
    pub fetch_owner: Option<bool>,
    /// Query parameter `max-keys`.
    pub max_keys: Option<i32>,
    /// Header `x-amz-optional-object-attributes`.
    pub optional_object_attributes: Vec<OptionalObjectAttributes>,
    /// Query parameter `prefix`.
    pub prefix: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `start-after`.
    pub start_after: Option<String>,
}

impl ListObjectsV2Request {
    /// Creates a `ListObjectsV2Request` from its required members.
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
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }

    #[must_use]
    pub fn with_continuation_token(mut self, continuation_token: impl Into<String>) -> Self {
        self.continuation_token = Some(continuation_token.into());
        self
    }

    #[must_use]
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    #[must_use]
    pub fn encoding_type(&self) -> Option<EncodingType> {
        self.encoding_type
    }

    #[must_use]
    pub fn with_encoding_type(mut self, encoding_type: EncodingType) -> Self {
        self.encoding_type = Some(encoding_type);
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
    pub fn fetch_owner(&self) -> Option<bool> {
        self.fetch_owner
    }

    #[must_use]
    pub fn with_fetch_owner(mut self, fetch_owner: bool) -> Self {
        self.fetch_owner = Some(fetch_owner);
        self
    }

    #[must_use]
    pub fn max_keys(&self) -> Option<i32> {
        self.max_keys
    }

    #[must_use]
    pub fn with_max_keys(mut self, max_keys: i32) -> Self {
        self.max_keys = Some(max_keys);
        self
    }

    #[must_use]
    pub fn optional_object_attributes(&self) -> &[OptionalObjectAttributes] {
        &self.optional_object_attributes
    }

    #[must_use]
    pub fn with_optional_object_attributes(
        mut self,
        optional_object_attributes: impl IntoIterator<Item = OptionalObjectAttributes>,
    ) -> Self {
        self.optional_object_attributes = optional_object_attributes.into_iter().collect();
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
    pub fn start_after(&self) -> Option<&str> {
        self.start_after.as_deref()
    }

    #[must_use]
    pub fn with_start_after(mut self, start_after: impl Into<String>) -> Self {
        self.start_after = Some(start_after.into());
        self
    }
}
