//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use std::collections::HashMap;
use std::fmt;

use crate::blob::StreamingBlob;
use crate::exception::DuplicateKeyError;
use crate::types::{
    SENSITIVE_DATA_REDACTED, ChecksumAlgorithm, ChecksumMode, Delete, MetadataDirective,
    ObjectCannedACL, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer, RestoreRequest,
    ServerSideEncryption, StorageClass, TaggingDirective,
};

/// Request parameters for the `CopyObject` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CopyObjectRequest {
    /// Header `x-amz-acl`.
    pub acl: Option<ObjectCannedACL>,
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// Header `Cache-Control`.
    pub cache_control: Option<String>,
    /// Header `x-amz-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// Header `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// Header `Content-Language`.
    pub content_language: Option<String>,
    /// Header `Content-Type`.
    pub content_type: Option<String>,
    /// Header `x-amz-copy-source`.
    pub copy_source: String,
    /// Header `x-amz-copy-source-if-match`.
    pub copy_source_if_match: Option<String>,
    /// Header `x-amz-copy-source-if-modified-since`.
    pub copy_source_if_modified_since: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-copy-source-if-none-match`.
    pub copy_source_if_none_match: Option<String>,
    /// Header `x-amz-copy-source-if-unmodified-since`.
    pub copy_source_if_unmodified_since: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-copy-source-server-side-encryption-customer-algorithm`.
    pub copy_source_sse_customer_algorithm: Option<String>,
    /// Header `x-amz-copy-source-server-side-encryption-customer-key`.
    pub copy_source_sse_customer_key: Option<String>,
    /// Header `x-amz-copy-source-server-side-encryption-customer-key-MD5`.
    pub copy_source_sse_customer_key_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `x-amz-source-expected-bucket-owner`.
    pub expected_source_bucket_owner: Option<String>,
    /// Header `Expires`.
    pub expires: Option<String>,
    /// Header `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// Header `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// Header `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// Header `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    /// Header `If-Match`.
    pub if_match: Option<String>,
    /// Header `If-None-Match`.
    pub if_none_match: Option<String>,
    /// URI path label.
    pub key: String,
    /// Headers prefixed with `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// Header `x-amz-metadata-directive`.
    pub metadata_directive: Option<MetadataDirective>,
    /// Header `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// Header `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// Header `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Header `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// Header `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// Header `x-amz-tagging`.
    pub tagging: Option<String>,
    /// Header `x-amz-tagging-directive`.
    pub tagging_directive: Option<TaggingDirective>,
    /// Header `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

impl CopyObjectRequest {
    /// Creates a `CopyObjectRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        copy_source: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            copy_source: copy_source.into(),
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
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn bucket_key_enabled(&self) -> Option<bool> {
        self.bucket_key_enabled
    }

    #[must_use]
    pub fn with_bucket_key_enabled(mut self, bucket_key_enabled: bool) -> Self {
        self.bucket_key_enabled = Some(bucket_key_enabled);
        self
    }

    #[must_use]
    pub fn cache_control(&self) -> Option<&str> {
        self.cache_control.as_deref()
    }

    #[must_use]
    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
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
    pub fn content_disposition(&self) -> Option<&str> {
        self.content_disposition.as_deref()
    }

    #[must_use]
    pub fn with_content_disposition(mut self, content_disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(content_disposition.into());
        self
    }

    #[must_use]
    pub fn content_encoding(&self) -> Option<&str> {
        self.content_encoding.as_deref()
    }

    #[must_use]
    pub fn with_content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(content_encoding.into());
        self
    }

    #[must_use]
    pub fn content_language(&self) -> Option<&str> {
        self.content_language.as_deref()
    }

    #[must_use]
    pub fn with_content_language(mut self, content_language: impl Into<String>) -> Self {
        self.content_language = Some(content_language.into());
        self
    }

    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn copy_source(&self) -> &str {
        &self.copy_source
    }

    #[must_use]
    pub fn with_copy_source(mut self, copy_source: impl Into<String>) -> Self {
        self.copy_source = copy_source.into();
        self
    }

    #[must_use]
    pub fn copy_source_if_match(&self) -> Option<&str> {
        self.copy_source_if_match.as_deref()
    }

    #[must_use]
    pub fn with_copy_source_if_match(mut self, copy_source_if_match: impl Into<String>) -> Self {
        self.copy_source_if_match = Some(copy_source_if_match.into());
        self
    }

    #[must_use]
    pub fn copy_source_if_modified_since(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.copy_source_if_modified_since
    }

    #[must_use]
    pub fn with_copy_source_if_modified_since(
        mut self,
        copy_source_if_modified_since: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.copy_source_if_modified_since = Some(copy_source_if_modified_since);
        self
    }

    #[must_use]
    pub fn copy_source_if_none_match(&self) -> Option<&str> {
        self.copy_source_if_none_match.as_deref()
    }

    #[must_use]
    pub fn with_copy_source_if_none_match(
        mut self,
        copy_source_if_none_match: impl Into<String>,
    ) -> Self {
        self.copy_source_if_none_match = Some(copy_source_if_none_match.into());
        self
    }

    #[must_use]
    pub fn copy_source_if_unmodified_since(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.copy_source_if_unmodified_since
    }

    #[must_use]
    pub fn with_copy_source_if_unmodified_since(
        mut self,
        copy_source_if_unmodified_since: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.copy_source_if_unmodified_since = Some(copy_source_if_unmodified_since);
        self
    }

    #[must_use]
    pub fn copy_source_sse_customer_algorithm(&self) -> Option<&str> {
        self.copy_source_sse_customer_algorithm.as_deref()
    }

    #[must_use]
    pub fn with_copy_source_sse_customer_algorithm(
        mut self,
        copy_source_sse_customer_algorithm: impl Into<String>,
    ) -> Self {
        self.copy_source_sse_customer_algorithm = Some(copy_source_sse_customer_algorithm.into());
        self
    }

    #[must_use]
    pub fn copy_source_sse_customer_key(&self) -> Option<&str> {
        self.copy_source_sse_customer_key.as_deref()
    }

    #[must_use]
    pub fn with_copy_source_sse_customer_key(
        mut self,
        copy_source_sse_customer_key: impl Into<String>,
    ) -> Self {
        self.copy_source_sse_customer_key = Some(copy_source_sse_customer_key.into());
        self
    }

    #[must_use]
    pub fn copy_source_sse_customer_key_md5(&self) -> Option<&str> {
        self.copy_source_sse_customer_key_md5.as_deref()
    }

    #[must_use]
    pub fn with_copy_source_sse_customer_key_md5(
        mut self,
        copy_source_sse_customer_key_md5: impl Into<String>,
    ) -> Self {
        self.copy_source_sse_customer_key_md5 = Some(copy_source_sse_customer_key_md5.into());
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
    pub fn expected_source_bucket_owner(&self) -> Option<&str> {
        self.expected_source_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_source_bucket_owner(
        mut self,
        expected_source_bucket_owner: impl Into<String>,
    ) -> Self {
        self.expected_source_bucket_owner = Some(expected_source_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn expires(&self) -> Option<&str> {
        self.expires.as_deref()
    }

    #[must_use]
    pub fn with_expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = Some(expires.into());
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
    pub fn grant_write_acp(&self) -> Option<&str> {
        self.grant_write_acp.as_deref()
    }

    #[must_use]
    pub fn with_grant_write_acp(mut self, grant_write_acp: impl Into<String>) -> Self {
        self.grant_write_acp = Some(grant_write_acp.into());
        self
    }

    #[must_use]
    pub fn if_match(&self) -> Option<&str> {
        self.if_match.as_deref()
    }

    #[must_use]
    pub fn with_if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    #[must_use]
    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }

    #[must_use]
    pub fn with_if_none_match(mut self, if_none_match: impl Into<String>) -> Self {
        self.if_none_match = Some(if_none_match.into());
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
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Adds a single `metadata` entry, failing if the key is already present.
    pub fn add_metadata_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DuplicateKeyError> {
        let key = key.into();
        if self.metadata.contains_key(&key) {
            return Err(DuplicateKeyError::new("metadata", key));
        }
        self.metadata.insert(key, value.into());
        Ok(self)
    }

    /// Removes every `metadata` entry.
    #[must_use]
    pub fn clear_metadata_entries(mut self) -> Self {
        self.metadata.clear();
        self
    }

    #[must_use]
    pub fn metadata_directive(&self) -> Option<MetadataDirective> {
        self.metadata_directive
    }

    #[must_use]
    pub fn with_metadata_directive(mut self, metadata_directive: MetadataDirective) -> Self {
        self.metadata_directive = Some(metadata_directive);
        self
    }

    #[must_use]
    pub fn object_lock_legal_hold_status(&self) -> Option<ObjectLockLegalHoldStatus> {
        self.object_lock_legal_hold_status
    }

    #[must_use]
    pub fn with_object_lock_legal_hold_status(
        mut self,
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus,
    ) -> Self {
        self.object_lock_legal_hold_status = Some(object_lock_legal_hold_status);
        self
    }

    #[must_use]
    pub fn object_lock_mode(&self) -> Option<ObjectLockMode> {
        self.object_lock_mode
    }

    #[must_use]
    pub fn with_object_lock_mode(mut self, object_lock_mode: ObjectLockMode) -> Self {
        self.object_lock_mode = Some(object_lock_mode);
        self
    }

    #[must_use]
    pub fn object_lock_retain_until_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.object_lock_retain_until_date
    }

    #[must_use]
    pub fn with_object_lock_retain_until_date(
        mut self,
        object_lock_retain_until_date: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.object_lock_retain_until_date = Some(object_lock_retain_until_date);
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
    pub fn ssekms_encryption_context(&self) -> Option<&str> {
        self.ssekms_encryption_context.as_deref()
    }

    #[must_use]
    pub fn with_ssekms_encryption_context(
        mut self,
        ssekms_encryption_context: impl Into<String>,
    ) -> Self {
        self.ssekms_encryption_context = Some(ssekms_encryption_context.into());
        self
    }

    #[must_use]
    pub fn ssekms_key_id(&self) -> Option<&str> {
        self.ssekms_key_id.as_deref()
    }

    #[must_use]
    pub fn with_ssekms_key_id(mut self, ssekms_key_id: impl Into<String>) -> Self {
        self.ssekms_key_id = Some(ssekms_key_id.into());
        self
    }

    #[must_use]
    pub fn server_side_encryption(&self) -> Option<ServerSideEncryption> {
        self.server_side_encryption
    }

    #[must_use]
    pub fn with_server_side_encryption(
        mut self,
        server_side_encryption: ServerSideEncryption,
    ) -> Self {
        self.server_side_encryption = Some(server_side_encryption);
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<StorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    #[must_use]
    pub fn tagging(&self) -> Option<&str> {
        self.tagging.as_deref()
    }

    #[must_use]
    pub fn with_tagging(mut self, tagging: impl Into<String>) -> Self {
        self.tagging = Some(tagging.into());
        self
    }

    #[must_use]
    pub fn tagging_directive(&self) -> Option<TaggingDirective> {
        self.tagging_directive
    }

    #[must_use]
    pub fn with_tagging_directive(mut self, tagging_directive: TaggingDirective) -> Self {
        self.tagging_directive = Some(tagging_directive);
        self
    }

    #[must_use]
    pub fn website_redirect_location(&self) -> Option<&str> {
        self.website_redirect_location.as_deref()
    }

    #[must_use]
    pub fn with_website_redirect_location(
        mut self,
        website_redirect_location: impl Into<String>,
    ) -> Self {
        self.website_redirect_location = Some(website_redirect_location.into());
        self
    }
}

impl fmt::Debug for CopyObjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyObjectRequest")
            .field("acl", &self.acl)
            .field("bucket", &self.bucket)
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("cache_control", &self.cache_control)
            .field("checksum_algorithm", &self.checksum_algorithm)
            .field("content_disposition", &self.content_disposition)
            .field("content_encoding", &self.content_encoding)
            .field("content_language", &self.content_language)
            .field("content_type", &self.content_type)
            .field("copy_source", &self.copy_source)
            .field("copy_source_if_match", &self.copy_source_if_match)
            .field("copy_source_if_modified_since", &self.copy_source_if_modified_since)
            .field("copy_source_if_none_match", &self.copy_source_if_none_match)
            .field("copy_source_if_unmodified_since", &self.copy_source_if_unmodified_since)
            .field("copy_source_sse_customer_algorithm", &self.copy_source_sse_customer_algorithm)
            .field(
                "copy_source_sse_customer_key",
                &self.copy_source_sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("copy_source_sse_customer_key_md5", &self.copy_source_sse_customer_key_md5)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("expected_source_bucket_owner", &self.expected_source_bucket_owner)
            .field("expires", &self.expires)
            .field("grant_full_control", &self.grant_full_control)
            .field("grant_read", &self.grant_read)
            .field("grant_read_acp", &self.grant_read_acp)
            .field("grant_write_acp", &self.grant_write_acp)
            .field("if_match", &self.if_match)
            .field("if_none_match", &self.if_none_match)
            .field("key", &self.key)
            .field("metadata", &self.metadata)
            .field("metadata_directive", &self.metadata_directive)
            .field("object_lock_legal_hold_status", &self.object_lock_legal_hold_status)
            .field("object_lock_mode", &self.object_lock_mode)
            .field("object_lock_retain_until_date", &self.object_lock_retain_until_date)
            .field("request_payer", &self.request_payer)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field(
                "sse_customer_key",
                &self.sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field(
                "ssekms_encryption_context",
                &self.ssekms_encryption_context.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .field("storage_class", &self.storage_class)
            .field("tagging", &self.tagging)
            .field("tagging_directive", &self.tagging_directive)
            .field("website_redirect_location", &self.website_redirect_location)
            .finish()
    }
}

/// Request parameters for the `DeleteObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-bypass-governance-retention`.
    pub bypass_governance_retention: Option<bool>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `If-Match`.
    pub if_match: Option<String>,
    /// Header `x-amz-if-match-last-modified-time`.
    pub if_match_last_modified_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-if-match-size`.
    pub if_match_size: Option<i64>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-mfa`.
    pub mfa: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl DeleteObjectRequest {
    /// Creates a `DeleteObjectRequest` from its required members.
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
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn if_match(&self) -> Option<&str> {
        self.if_match.as_deref()
    }

    #[must_use]
    pub fn with_if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    #[must_use]
    pub fn if_match_last_modified_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.if_match_last_modified_time
    }

    #[must_use]
    pub fn with_if_match_last_modified_time(
        mut self,
        if_match_last_modified_time: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.if_match_last_modified_time = Some(if_match_last_modified_time);
        self
    }

    #[must_use]
    pub fn if_match_size(&self) -> Option<i64> {
        self.if_match_size
    }

    #[must_use]
    pub fn with_if_match_size(mut self, if_match_size: i64) -> Self {
        self.if_match_size = Some(if_match_size);
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
    pub fn mfa(&self) -> Option<&str> {
        self.mfa.as_deref()
    }

    #[must_use]
    pub fn with_mfa(mut self, mfa: impl Into<String>) -> Self {
        self.mfa = Some(mfa.into());
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

/// Request parameters for the `DeleteObjects` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectsRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-bypass-governance-retention`.
    pub bypass_governance_retention: Option<bool>,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Request body.
    pub delete: Delete,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `x-amz-mfa`.
    pub mfa: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
}

impl DeleteObjectsRequest {
    /// Creates a `DeleteObjectsRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, delete: Delete) -> Self {
        Self {
            bucket: bucket.into(),
            delete,
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
    pub fn delete(&self) -> &Delete {
        &self.delete
    }

    #[must_use]
    pub fn with_delete(mut self, delete: Delete) -> Self {
        self.delete = delete;
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
    pub fn request_payer(&self) -> Option<RequestPayer> {
        self.request_payer
    }

    #[must_use]
    pub fn with_request_payer(mut self, request_payer: RequestPayer) -> Self {
        self.request_payer = Some(request_payer);
        self
    }
}

/// Request parameters for the `GetObject` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GetObjectRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-checksum-mode`.
    pub checksum_mode: Option<ChecksumMode>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `If-Match`.
    pub if_match: Option<String>,
    /// Header `If-Modified-Since`.
    pub if_modified_since: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `If-None-Match`.
    pub if_none_match: Option<String>,
    /// Header `If-Unmodified-Since`.
    pub if_unmodified_since: Option<chrono::DateTime<chrono::Utc>>,
    /// URI path label.
    pub key: String,
    /// Query parameter `partNumber`.
    pub part_number: Option<i32>,
    /// Header `Range`.
    pub range: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `response-cache-control`.
    pub response_cache_control: Option<String>,
    /// Query parameter `response-content-disposition`.
    pub response_content_disposition: Option<String>,
    /// Query parameter `response-content-encoding`.
    pub response_content_encoding: Option<String>,
    /// Query parameter `response-content-language`.
    pub response_content_language: Option<String>,
    /// Query parameter `response-content-type`.
    pub response_content_type: Option<String>,
    /// Query parameter `response-expires`.
    pub response_expires: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectRequest {
    /// Creates a `GetObjectRequest` from its required members.
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
    pub fn checksum_mode(&self) -> Option<ChecksumMode> {
        self.checksum_mode
    }

    #[must_use]
    pub fn with_checksum_mode(mut self, checksum_mode: ChecksumMode) -> Self {
        self.checksum_mode = Some(checksum_mode);
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
    pub fn if_match(&self) -> Option<&str> {
        self.if_match.as_deref()
    }

    #[must_use]
    pub fn with_if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    #[must_use]
    pub fn if_modified_since(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.if_modified_since
    }

    #[must_use]
    pub fn with_if_modified_since(
        mut self,
        if_modified_since: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.if_modified_since = Some(if_modified_since);
        self
    }

    #[must_use]
    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }

    #[must_use]
    pub fn with_if_none_match(mut self, if_none_match: impl Into<String>) -> Self {
        self.if_none_match = Some(if_none_match.into());
        self
    }

    #[must_use]
    pub fn if_unmodified_since(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.if_unmodified_since
    }

    #[must_use]
    pub fn with_if_unmodified_since(
        mut self,
        if_unmodified_since: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.if_unmodified_since = Some(if_unmodified_since);
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
    pub fn part_number(&self) -> Option<i32> {
        self.part_number
    }

    #[must_use]
    pub fn with_part_number(mut self, part_number: i32) -> Self {
        self.part_number = Some(part_number);
        self
    }

    #[must_use]
    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }

    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
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
    pub fn response_cache_control(&self) -> Option<&str> {
        self.response_cache_control.as_deref()
    }

    #[must_use]
    pub fn with_response_cache_control(
        mut self,
        response_cache_control: impl Into<String>,
    ) -> Self {
        self.response_cache_control = Some(response_cache_control.into());
        self
    }

    #[must_use]
    pub fn response_content_disposition(&self) -> Option<&str> {
        self.response_content_disposition.as_deref()
    }

    #[must_use]
    pub fn with_response_content_disposition(
        mut self,
        response_content_disposition: impl Into<String>,
    ) -> Self {
        self.response_content_disposition = Some(response_content_disposition.into());
        self
    }

    #[must_use]
    pub fn response_content_encoding(&self) -> Option<&str> {
        self.response_content_encoding.as_deref()
    }

    #[must_use]
    pub fn with_response_content_encoding(
        mut self,
        response_content_encoding: impl Into<String>,
    ) -> Self {
        self.response_content_encoding = Some(response_content_encoding.into());
        self
    }

    #[must_use]
    pub fn response_content_language(&self) -> Option<&str> {
        self.response_content_language.as_deref()
    }

    #[must_use]
    pub fn with_response_content_language(
        mut self,
        response_content_language: impl Into<String>,
    ) -> Self {
        self.response_content_language = Some(response_content_language.into());
        self
    }

    #[must_use]
    pub fn response_content_type(&self) -> Option<&str> {
        self.response_content_type.as_deref()
    }

    #[must_use]
    pub fn with_response_content_type(mut self, response_content_type: impl Into<String>) -> Self {
        self.response_content_type = Some(response_content_type.into());
        self
    }

    #[must_use]
    pub fn response_expires(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.response_expires
    }

    #[must_use]
    pub fn with_response_expires(
        mut self,
        response_expires: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.response_expires = Some(response_expires);
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

impl fmt::Debug for GetObjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetObjectRequest")
            .field("bucket", &self.bucket)
            .field("checksum_mode", &self.checksum_mode)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("if_match", &self.if_match)
            .field("if_modified_since", &self.if_modified_since)
            .field("if_none_match", &self.if_none_match)
            .field("if_unmodified_since", &self.if_unmodified_since)
            .field("key", &self.key)
            .field("part_number", &self.part_number)
            .field("range", &self.range)
            .field("request_payer", &self.request_payer)
            .field("response_cache_control", &self.response_cache_control)
            .field("response_content_disposition", &self.response_content_disposition)
            .field("response_content_encoding", &self.response_content_encoding)
            .field("response_content_language", &self.response_content_language)
            .field("response_content_type", &self.response_content_type)
            .field("response_expires", &self.response_expires)
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

/// Request parameters for the `GetObjectTorrent` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectTorrentRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
}

impl GetObjectTorrentRequest {
    /// Creates a `GetObjectTorrentRequest` from its required members.
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
}

/// Request parameters for the `HeadObject` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeadObjectRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-checksum-mode`.
    pub checksum_mode: Option<ChecksumMode>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `If-Match`.
    pub if_match: Option<String>,
    /// Header `If-Modified-Since`.
    pub if_modified_since: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `If-None-Match`.
    pub if_none_match: Option<String>,
    /// Header `If-Unmodified-Since`.
    pub if_unmodified_since: Option<chrono::DateTime<chrono::Utc>>,
    /// URI path label.
    pub key: String,
    /// Query parameter `partNumber`.
    pub part_number: Option<i32>,
    /// Header `Range`.
    pub range: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `response-cache-control`.
    pub response_cache_control: Option<String>,
    /// Query parameter `response-content-disposition`.
    pub response_content_disposition: Option<String>,
    /// Query parameter `response-content-encoding`.
    pub response_content_encoding: Option<String>,
    /// Query parameter `response-content-language`.
    pub response_content_language: Option<String>,
    /// Query parameter `response-content-type`.
    pub response_content_type: Option<String>,
    /// Query parameter `response-expires`.
    pub response_expires: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl HeadObjectRequest {
    /// Creates a `HeadObjectRequest` from its required members.
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
    pub fn checksum_mode(&self) -> Option<ChecksumMode> {
        self.checksum_mode
    }

    #[must_use]
    pub fn with_checksum_mode(mut self, checksum_mode: ChecksumMode) -> Self {
        self.checksum_mode = Some(checksum_mode);
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
    pub fn if_match(&self) -> Option<&str> {
        self.if_match.as_deref()
    }

    #[must_use]
    pub fn with_if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    #[must_use]
    pub fn if_modified_since(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.if_modified_since
    }

    #[must_use]
    pub fn with_if_modified_since(
        mut self,
        if_modified_since: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.if_modified_since = Some(if_modified_since);
        self
    }

    #[must_use]
    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }

    #[must_use]
    pub fn with_if_none_match(mut self, if_none_match: impl Into<String>) -> Self {
        self.if_none_match = Some(if_none_match.into());
        self
    }

    #[must_use]
    pub fn if_unmodified_since(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.if_unmodified_since
    }

    #[must_use]
    pub fn with_if_unmodified_since(
        mut self,
        if_unmodified_since: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.if_unmodified_since = Some(if_unmodified_since);
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
    pub fn part_number(&self) -> Option<i32> {
        self.part_number
    }

    #[must_use]
    pub fn with_part_number(mut self, part_number: i32) -> Self {
        self.part_number = Some(part_number);
        self
    }

    #[must_use]
    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }

    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
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
    pub fn response_cache_control(&self) -> Option<&str> {
        self.response_cache_control.as_deref()
    }

    #[must_use]
    pub fn with_response_cache_control(
        mut self,
        response_cache_control: impl Into<String>,
    ) -> Self {
        self.response_cache_control = Some(response_cache_control.into());
        self
    }

    #[must_use]
    pub fn response_content_disposition(&self) -> Option<&str> {
        self.response_content_disposition.as_deref()
    }

    #[must_use]
    pub fn with_response_content_disposition(
        mut self,
        response_content_disposition: impl Into<String>,
    ) -> Self {
        self.response_content_disposition = Some(response_content_disposition.into());
        self
    }

    #[must_use]
    pub fn response_content_encoding(&self) -> Option<&str> {
        self.response_content_encoding.as_deref()
    }

    #[must_use]
    pub fn with_response_content_encoding(
        mut self,
        response_content_encoding: impl Into<String>,
    ) -> Self {
        self.response_content_encoding = Some(response_content_encoding.into());
        self
    }

    #[must_use]
    pub fn response_content_language(&self) -> Option<&str> {
        self.response_content_language.as_deref()
    }

    #[must_use]
    pub fn with_response_content_language(
        mut self,
        response_content_language: impl Into<String>,
    ) -> Self {
        self.response_content_language = Some(response_content_language.into());
        self
    }

    #[must_use]
    pub fn response_content_type(&self) -> Option<&str> {
        self.response_content_type.as_deref()
    }

    #[must_use]
    pub fn with_response_content_type(mut self, response_content_type: impl Into<String>) -> Self {
        self.response_content_type = Some(response_content_type.into());
        self
    }

    #[must_use]
    pub fn response_expires(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.response_expires
    }

    #[must_use]
    pub fn with_response_expires(
        mut self,
        response_expires: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.response_expires = Some(response_expires);
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

impl fmt::Debug for HeadObjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadObjectRequest")
            .field("bucket", &self.bucket)
            .field("checksum_mode", &self.checksum_mode)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("if_match", &self.if_match)
            .field("if_modified_since", &self.if_modified_since)
            .field("if_none_match", &self.if_none_match)
            .field("if_unmodified_since", &self.if_unmodified_since)
            .field("key", &self.key)
            .field("part_number", &self.part_number)
            .field("range", &self.range)
            .field("request_payer", &self.request_payer)
            .field("response_cache_control", &self.response_cache_control)
            .field("response_content_disposition", &self.response_content_disposition)
            .field("response_content_encoding", &self.response_content_encoding)
            .field("response_content_language", &self.response_content_language)
            .field("response_content_type", &self.response_content_type)
            .field("response_expires", &self.response_expires)
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

/// Request parameters for the `PutObject` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PutObjectRequest {
    /// Header `x-amz-acl`.
    pub acl: Option<ObjectCannedACL>,
    /// Request body.
    pub body: Option<StreamingBlob>,
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// Header `Cache-Control`.
    pub cache_control: Option<String>,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `x-amz-checksum-crc32`.
    pub checksum_crc32: Option<String>,
    /// Header `x-amz-checksum-crc32c`.
    pub checksum_crc32c: Option<String>,
    /// Header `x-amz-checksum-crc64nvme`.
    pub checksum_crc64nvme: Option<String>,
    /// Header `x-amz-checksum-sha1`.
    pub checksum_sha1: Option<String>,
    /// Header `x-amz-checksum-sha256`.
    pub checksum_sha256: Option<String>,
    /// Header `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// Header `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// Header `Content-Language`.
    pub content_language: Option<String>,
    /// Header `Content-Length`.
    pub content_length: Option<i64>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `Content-Type`.
    pub content_type: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `Expires`.
    pub expires: Option<String>,
    /// Header `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// Header `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// Header `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// Header `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    /// Header `If-Match`.
    pub if_match: Option<String>,
    /// Header `If-None-Match`.
    pub if_none_match: Option<String>,
    /// URI path label.
    pub key: String,
    /// Headers prefixed with `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// Header `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// Header `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// Header `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Header `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// Header `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// Header `x-amz-tagging`.
    pub tagging: Option<String>,
    /// Header `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
    /// Header `x-amz-write-offset-bytes`.
    pub write_offset_bytes: Option<i64>,
}

impl PutObjectRequest {
    /// Creates a `PutObjectRequest` from its required members.
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
    pub fn body(&self) -> Option<&StreamingBlob> {
        self.body.as_ref()
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<StreamingBlob>) -> Self {
        self.body = Some(body.into());
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
    pub fn bucket_key_enabled(&self) -> Option<bool> {
        self.bucket_key_enabled
    }

    #[must_use]
    pub fn with_bucket_key_enabled(mut self, bucket_key_enabled: bool) -> Self {
        self.bucket_key_enabled = Some(bucket_key_enabled);
        self
    }

    #[must_use]
    pub fn cache_control(&self) -> Option<&str> {
        self.cache_control.as_deref()
    }

    #[must_use]
    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
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
    pub fn checksum_crc32(&self) -> Option<&str> {
        self.checksum_crc32.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32(mut self, checksum_crc32: impl Into<String>) -> Self {
        self.checksum_crc32 = Some(checksum_crc32.into());
        self
    }

    #[must_use]
    pub fn checksum_crc32c(&self) -> Option<&str> {
        self.checksum_crc32c.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32c(mut self, checksum_crc32c: impl Into<String>) -> Self {
        self.checksum_crc32c = Some(checksum_crc32c.into());
        self
    }

    #[must_use]
    pub fn checksum_crc64nvme(&self) -> Option<&str> {
        self.checksum_crc64nvme.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc64nvme(mut self, checksum_crc64nvme: impl Into<String>) -> Self {
        self.checksum_crc64nvme = Some(checksum_crc64nvme.into());
        self
    }

    #[must_use]
    pub fn checksum_sha1(&self) -> Option<&str> {
        self.checksum_sha1.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha1(mut self, checksum_sha1: impl Into<String>) -> Self {
        self.checksum_sha1 = Some(checksum_sha1.into());
        self
    }

    #[must_use]
    pub fn checksum_sha256(&self) -> Option<&str> {
        self.checksum_sha256.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha256(mut self, checksum_sha256: impl Into<String>) -> Self {
        self.checksum_sha256 = Some(checksum_sha256.into());
        self
    }

    #[must_use]
    pub fn content_disposition(&self) -> Option<&str> {
        self.content_disposition.as_deref()
    }

    #[must_use]
    pub fn with_content_disposition(mut self, content_disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(content_disposition.into());
        self
    }

    #[must_use]
    pub fn content_encoding(&self) -> Option<&str> {
        self.content_encoding.as_deref()
    }

    #[must_use]
    pub fn with_content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(content_encoding.into());
        self
    }

    #[must_use]
    pub fn content_language(&self) -> Option<&str> {
        self.content_language.as_deref()
    }

    #[must_use]
    pub fn with_content_language(mut self, content_language: impl Into<String>) -> Self {
        self.content_language = Some(content_language.into());
        self
    }

    #[must_use]
    pub fn content_length(&self) -> Option<i64> {
        self.content_length
    }

    #[must_use]
    pub fn with_content_length(mut self, content_length: i64) -> Self {
        self.content_length = Some(content_length);
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
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
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
    pub fn expires(&self) -> Option<&str> {
        self.expires.as_deref()
    }

    #[must_use]
    pub fn with_expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = Some(expires.into());
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
    pub fn grant_write_acp(&self) -> Option<&str> {
        self.grant_write_acp.as_deref()
    }

    #[must_use]
    pub fn with_grant_write_acp(mut self, grant_write_acp: impl Into<String>) -> Self {
        self.grant_write_acp = Some(grant_write_acp.into());
        self
    }

    #[must_use]
    pub fn if_match(&self) -> Option<&str> {
        self.if_match.as_deref()
    }

    #[must_use]
    pub fn with_if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    #[must_use]
    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }

    #[must_use]
    pub fn with_if_none_match(mut self, if_none_match: impl Into<String>) -> Self {
        self.if_none_match = Some(if_none_match.into());
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
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Adds a single `metadata` entry, failing if the key is already present.
    pub fn add_metadata_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DuplicateKeyError> {
        let key = key.into();
        if self.metadata.contains_key(&key) {
            return Err(DuplicateKeyError::new("metadata", key));
        }
        self.metadata.insert(key, value.into());
        Ok(self)
    }

    /// Removes every `metadata` entry.
    #[must_use]
    pub fn clear_metadata_entries(mut self) -> Self {
        self.metadata.clear();
        self
    }

    #[must_use]
    pub fn object_lock_legal_hold_status(&self) -> Option<ObjectLockLegalHoldStatus> {
        self.object_lock_legal_hold_status
    }

    #[must_use]
    pub fn with_object_lock_legal_hold_status(
        mut self,
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus,
    ) -> Self {
        self.object_lock_legal_hold_status = Some(object_lock_legal_hold_status);
        self
    }

    #[must_use]
    pub fn object_lock_mode(&self) -> Option<ObjectLockMode> {
        self.object_lock_mode
    }

    #[must_use]
    pub fn with_object_lock_mode(mut self, object_lock_mode: ObjectLockMode) -> Self {
        self.object_lock_mode = Some(object_lock_mode);
        self
    }

    #[must_use]
    pub fn object_lock_retain_until_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.object_lock_retain_until_date
    }

    #[must_use]
    pub fn with_object_lock_retain_until_date(
        mut self,
        object_lock_retain_until_date: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.object_lock_retain_until_date = Some(object_lock_retain_until_date);
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
    pub fn ssekms_encryption_context(&self) -> Option<&str> {
        self.ssekms_encryption_context.as_deref()
    }

    #[must_use]
    pub fn with_ssekms_encryption_context(
        mut self,
        ssekms_encryption_context: impl Into<String>,
    ) -> Self {
        self.ssekms_encryption_context = Some(ssekms_encryption_context.into());
        self
    }

    #[must_use]
    pub fn ssekms_key_id(&self) -> Option<&str> {
        self.ssekms_key_id.as_deref()
    }

    #[must_use]
    pub fn with_ssekms_key_id(mut self, ssekms_key_id: impl Into<String>) -> Self {
        self.ssekms_key_id = Some(ssekms_key_id.into());
        self
    }

    #[must_use]
    pub fn server_side_encryption(&self) -> Option<ServerSideEncryption> {
        self.server_side_encryption
    }

    #[must_use]
    pub fn with_server_side_encryption(
        mut self,
        server_side_encryption: ServerSideEncryption,
    ) -> Self {
        self.server_side_encryption = Some(server_side_encryption);
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<StorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    #[must_use]
    pub fn tagging(&self) -> Option<&str> {
        self.tagging.as_deref()
    }

    #[must_use]
    pub fn with_tagging(mut self, tagging: impl Into<String>) -> Self {
        self.tagging = Some(tagging.into());
        self
    }

    #[must_use]
    pub fn website_redirect_location(&self) -> Option<&str> {
        self.website_redirect_location.as_deref()
    }

    #[must_use]
    pub fn with_website_redirect_location(
        mut self,
        website_redirect_location: impl Into<String>,
    ) -> Self {
        self.website_redirect_location = Some(website_redirect_location.into());
        self
    }

    #[must_use]
    pub fn write_offset_bytes(&self) -> Option<i64> {
        self.write_offset_bytes
    }

    #[must_use]
    pub fn with_write_offset_bytes(mut self, write_offset_bytes: i64) -> Self {
        self.write_offset_bytes = Some(write_offset_bytes);
        self
    }
}

impl fmt::Debug for PutObjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PutObjectRequest")
            .field("acl", &self.acl)
            .field("body", &self.body)
            .field("bucket", &self.bucket)
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("cache_control", &self.cache_control)
            .field("checksum_algorithm", &self.checksum_algorithm)
            .field("checksum_crc32", &self.checksum_crc32)
            .field("checksum_crc32c", &self.checksum_crc32c)
            .field("checksum_crc64nvme", &self.checksum_crc64nvme)
            .field("checksum_sha1", &self.checksum_sha1)
            .field("checksum_sha256", &self.checksum_sha256)
            .field("content_disposition", &self.content_disposition)
            .field("content_encoding", &self.content_encoding)
            .field("content_language", &self.content_language)
            .field("content_length", &self.content_length)
            .field("content_md5", &self.content_md5)
            .field("content_type", &self.content_type)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("expires", &self.expires)
            .field("grant_full_control", &self.grant_full_control)
            .field("grant_read", &self.grant_read)
            .field("grant_read_acp", &self.grant_read_acp)
            .field("grant_write_acp", &self.grant_write_acp)
            .field("if_match", &self.if_match)
            .field("if_none_match", &self.if_none_match)
            .field("key", &self.key)
            .field("metadata", &self.metadata)
            .field("object_lock_legal_hold_status", &self.object_lock_legal_hold_status)
            .field("object_lock_mode", &self.object_lock_mode)
            .field("object_lock_retain_until_date", &self.object_lock_retain_until_date)
            .field("request_payer", &self.request_payer)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field(
                "sse_customer_key",
                &self.sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field(
                "ssekms_encryption_context",
                &self.ssekms_encryption_context.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .field("storage_class", &self.storage_class)
            .field("tagging", &self.tagging)
            .field("website_redirect_location", &self.website_redirect_location)
            .field("write_offset_bytes", &self.write_offset_bytes)
            .finish()
    }
}

/// Request parameters for the `RestoreObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreObjectRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Request body.
    pub restore_request: Option<RestoreRequest>,
    /// Query parameter `versionId`.
    pub version_id: Option<String>,
}

impl RestoreObjectRequest {
    /// Creates a `RestoreObjectRequest` from its required members.
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
    pub fn restore_request(&self) -> Option<&RestoreRequest> {
        self.restore_request.as_ref()
    }

    #[must_use]
    pub fn with_restore_request(mut self, restore_request: RestoreRequest) -> Self {
        self.restore_request = Some(restore_request);
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
