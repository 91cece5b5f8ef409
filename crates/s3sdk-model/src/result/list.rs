//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::{
    CommonPrefix, DeleteMarkerEntry, EncodingType, Object, ObjectVersion, RequestCharged,
};

/// Result of the `ListObjectVersions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectVersionsResult {
    pub common_prefixes: Vec<CommonPrefix>,
    pub delete_markers: Vec<DeleteMarkerEntry>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub key_marker: Option<String>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_version_id_marker: Option<String>,
    pub prefix: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub version_id_marker: Option<String>,
    pub versions: Vec<ObjectVersion>,
}

impl ListObjectVersionsResult {
    #[must_use]
    pub fn common_prefixes(&self) -> &[CommonPrefix] {
        &self.common_prefixes
    }

    #[must_use]
    pub fn with_common_prefixes(
        mut self,
        common_prefixes: impl IntoIterator<Item = CommonPrefix>,
    ) -> Self {
        self.common_prefixes = common_prefixes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn delete_markers(&self) -> &[DeleteMarkerEntry] {
        &self.delete_markers
    }

    #[must_use]
    pub fn with_delete_markers(
        mut self,
        delete_markers: impl IntoIterator<Item = DeleteMarkerEntry>,
    ) -> Self {
        self.delete_markers = delete_markers.into_iter().collect();
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
    pub fn is_truncated(&self) -> Option<bool> {
        self.is_truncated
    }

    #[must_use]
    pub fn with_is_truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = Some(is_truncated);
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
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn next_key_marker(&self) -> Option<&str> {
        self.next_key_marker.as_deref()
    }

    #[must_use]
    pub fn with_next_key_marker(mut self, next_key_marker: impl Into<String>) -> Self {
        self.next_key_marker = Some(next_key_marker.into());
        self
    }

    #[must_use]
    pub fn next_version_id_marker(&self) -> Option<&str> {
        self.next_version_id_marker.as_deref()
    }

    #[must_use]
    pub fn with_next_version_id_marker(
        mut self,
        next_version_id_marker: impl Into<String>,
    ) -> Self {
        self.next_version_id_marker = Some(next_version_id_marker.into());
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
    pub fn request_charged(&self) -> Option<RequestCharged> {
        self.request_charged
    }

    #[must_use]
    pub fn with_request_charged(mut self, request_charged: RequestCharged) -> Self {
        self.request_charged = Some(request_charged);
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

    #[must_use]
    pub fn versions(&self) -> &[ObjectVersion] {
        &self.versions
    }

    #[must_use]
    pub fn with_versions(mut self, versions: impl IntoIterator<Item = ObjectVersion>) -> Self {
        self.versions = versions.into_iter().collect();
        self
    }
}

/// Result of the `ListObjects` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectsResult {
    pub common_prefixes: Vec<CommonPrefix>,
    pub contents: Vec<Object>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub marker: Option<String>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_marker: Option<String>,
    pub prefix: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl ListObjectsResult {
    #[must_use]
    pub fn common_prefixes(&self) -> &[CommonPrefix] {
        &self.common_prefixes
    }

    #[must_use]
    pub fn with_common_prefixes(
        mut self,
        common_prefixes: impl IntoIterator<Item = CommonPrefix>,
    ) -> Self {
        self.common_prefixes = common_prefixes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn contents(&self) -> &[Object] {
        &self.contents
    }

    #[must_use]
    pub fn with_contents(mut self, contents: impl IntoIterator<Item = Object>) -> Self {
        self.contents = contents.into_iter().collect();
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
    pub fn is_truncated(&self) -> Option<bool> {
        self.is_truncated
    }

    #[must_use]
    pub fn with_is_truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = Some(is_truncated);
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
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn next_marker(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }

    #[must_use]
    pub fn with_next_marker(mut self, next_marker: impl Into<String>) -> Self {
        self.next_marker = Some(next_marker.into());
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
    pub fn request_charged(&self) -> Option<RequestCharged> {
        self.request_charged
    }

    #[must_use]
    pub fn with_request_charged(mut self, request_charged: RequestCharged) -> Self {
        self.request_charged = Some(request_charged);
        self
    }
}

/// Result of the `ListObjectsV2` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectsV2Result {
    pub common_prefixes: Vec<CommonPrefix>,
    pub contents: Vec<Object>,
    pub continuation_token: Option<String>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub key_count: Option<i32>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_continuation_token: Option<String>,
    pub prefix: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub start_after: Option<String>,
}

impl ListObjectsV2Result {
    #[must_use]
    pub fn common_prefixes(&self) -> &[CommonPrefix] {
        &self.common_prefixes
    }

    #[must_use]
    pub fn with_common_prefixes(
        mut self,
        common_prefixes: impl IntoIterator<Item = CommonPrefix>,
    ) -> Self {
        self.common_prefixes = common_prefixes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn contents(&self) -> &[Object] {
        &self.contents
    }

    #[must_use]
    pub fn with_contents(mut self, contents: impl IntoIterator<Item = Object>) -> Self {
        self.contents = contents.into_iter().collect();
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
    pub fn is_truncated(&self) -> Option<bool> {
        self.is_truncated
    }

    #[must_use]
    pub fn with_is_truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = Some(is_truncated);
        self
    }

    #[must_use]
    pub fn key_count(&self) -> Option<i32> {
        self.key_count
    }

    #[must_use]
    pub fn with_key_count(mut self, key_count: i32) -> Self {
        self.key_count = Some(key_count);
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
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn next_continuation_token(&self) -> Option<&str> {
        self.next_continuation_token.as_deref()
    }

    #[must_use]
    pub fn with_next_continuation_token(
        mut self,
        next_continuation_token: impl Into<String>,
    ) -> Self {
        self.next_continuation_token = Some(next_continuation_token.into());
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
    pub fn request_charged(&self) -> Option<RequestCharged> {
        self.request_charged
    }

    #[must_use]
    pub fn with_request_charged(mut self, request_charged: RequestCharged) -> Self {
        self.request_charged = Some(request_charged);
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
