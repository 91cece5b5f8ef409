//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use std::collections::HashMap;
use std::fmt;

use crate::blob::StreamingBlob;
use crate::exception::DuplicateKeyError;
use crate::types::{
    SENSITIVE_DATA_REDACTED, ArchiveStatus, ChecksumType, CopyObjectResultDetails, DeleteError,
    DeletedObject, ObjectLockLegalHoldStatus, ObjectLockMode, ReplicationStatus, RequestCharged,
    ServerSideEncryption, StorageClass,
};

/// Result of the `CopyObject` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CopyObjectResult {
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// Response body.
    pub copy_object_result: Option<CopyObjectResultDetails>,
    /// Header `x-amz-copy-source-version-id`.
    pub copy_source_version_id: Option<String>,
    /// Header `x-amz-expiration`.
    pub expiration: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Header `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl CopyObjectResult {
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
    pub fn copy_object_result(&self) -> Option<&CopyObjectResultDetails> {
        self.copy_object_result.as_ref()
    }

    #[must_use]
    pub fn with_copy_object_result(mut self, copy_object_result: CopyObjectResultDetails) -> Self {
        self.copy_object_result = Some(copy_object_result);
        self
    }

    #[must_use]
    pub fn copy_source_version_id(&self) -> Option<&str> {
        self.copy_source_version_id.as_deref()
    }

    #[must_use]
    pub fn with_copy_source_version_id(
        mut self,
        copy_source_version_id: impl Into<String>,
    ) -> Self {
        self.copy_source_version_id = Some(copy_source_version_id.into());
        self
    }

    #[must_use]
    pub fn expiration(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    #[must_use]
    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
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
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

impl fmt::Debug for CopyObjectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyObjectResult")
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("copy_object_result", &self.copy_object_result)
            .field("copy_source_version_id", &self.copy_source_version_id)
            .field("expiration", &self.expiration)
            .field("request_charged", &self.request_charged)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field(
                "ssekms_encryption_context",
                &self.ssekms_encryption_context.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .field("version_id", &self.version_id)
            .finish()
    }
}

/// Result of the `DeleteObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectResult {
    /// Header `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl DeleteObjectResult {
    #[must_use]
    pub fn delete_marker(&self) -> Option<bool> {
        self.delete_marker
    }

    #[must_use]
    pub fn with_delete_marker(mut self, delete_marker: bool) -> Self {
        self.delete_marker = Some(delete_marker);
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
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Result of the `DeleteObjects` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectsResult {
    pub deleted: Vec<DeletedObject>,
    pub errors: Vec<DeleteError>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl DeleteObjectsResult {
    #[must_use]
    pub fn deleted(&self) -> &[DeletedObject] {
        &self.deleted
    }

    #[must_use]
    pub fn with_deleted(mut self, deleted: impl IntoIterator<Item = DeletedObject>) -> Self {
        self.deleted = deleted.into_iter().collect();
        self
    }

    #[must_use]
    pub fn errors(&self) -> &[DeleteError] {
        &self.errors
    }

    #[must_use]
    pub fn with_errors(mut self, errors: impl IntoIterator<Item = DeleteError>) -> Self {
        self.errors = errors.into_iter().collect();
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

/// Result of the `GetObject` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GetObjectResult {
    /// Header `accept-ranges`.
    pub accept_ranges: Option<String>,
    /// Response body.
    pub body: Option<StreamingBlob>,
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// Header `Cache-Control`.
    pub cache_control: Option<String>,
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
    /// Header `x-amz-checksum-type`.
    pub checksum_type: Option<ChecksumType>,
    /// Header `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// Header `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// Header `Content-Language`.
    pub content_language: Option<String>,
    /// Header `Content-Length`.
    pub content_length: Option<i64>,
    /// Header `Content-Range`.
    pub content_range: Option<String>,
    /// Header `Content-Type`.
    pub content_type: Option<String>,
    /// Header `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// Header `ETag`.
    pub e_tag: Option<String>,
    /// Header `x-amz-expiration`.
    pub expiration: Option<String>,
    /// Header `Expires`.
    pub expires: Option<String>,
    /// Header `Last-Modified`.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// Headers prefixed with `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// Header `x-amz-missing-meta`.
    pub missing_meta: Option<i32>,
    /// Header `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// Header `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// Header `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-mp-parts-count`.
    pub parts_count: Option<i32>,
    /// Header `x-amz-replication-status`.
    pub replication_status: Option<ReplicationStatus>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-restore`.
    pub restore: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// Header `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// Header `x-amz-tagging-count`.
    pub tag_count: Option<i32>,
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
    /// Header `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

impl GetObjectResult {
    #[must_use]
    pub fn accept_ranges(&self) -> Option<&str> {
        self.accept_ranges.as_deref()
    }

    #[must_use]
    pub fn with_accept_ranges(mut self, accept_ranges: impl Into<String>) -> Self {
        self.accept_ranges = Some(accept_ranges.into());
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
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    #[must_use]
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = Some(checksum_type);
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
    pub fn content_range(&self) -> Option<&str> {
        self.content_range.as_deref()
    }

    #[must_use]
    pub fn with_content_range(mut self, content_range: impl Into<String>) -> Self {
        self.content_range = Some(content_range.into());
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
    pub fn delete_marker(&self) -> Option<bool> {
        self.delete_marker
    }

    #[must_use]
    pub fn with_delete_marker(mut self, delete_marker: bool) -> Self {
        self.delete_marker = Some(delete_marker);
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn expiration(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    #[must_use]
    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
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
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
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
    pub fn missing_meta(&self) -> Option<i32> {
        self.missing_meta
    }

    #[must_use]
    pub fn with_missing_meta(mut self, missing_meta: i32) -> Self {
        self.missing_meta = Some(missing_meta);
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
    pub fn parts_count(&self) -> Option<i32> {
        self.parts_count
    }

    #[must_use]
    pub fn with_parts_count(mut self, parts_count: i32) -> Self {
        self.parts_count = Some(parts_count);
        self
    }

    #[must_use]
    pub fn replication_status(&self) -> Option<ReplicationStatus> {
        self.replication_status
    }

    #[must_use]
    pub fn with_replication_status(mut self, replication_status: ReplicationStatus) -> Self {
        self.replication_status = Some(replication_status);
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
    pub fn restore(&self) -> Option<&str> {
        self.restore.as_deref()
    }

    #[must_use]
    pub fn with_restore(mut self, restore: impl Into<String>) -> Self {
        self.restore = Some(restore.into());
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
    pub fn sse_customer_key_md5(&self) -> Option<&str> {
        self.sse_customer_key_md5.as_deref()
    }

    #[must_use]
    pub fn with_sse_customer_key_md5(mut self, sse_customer_key_md5: impl Into<String>) -> Self {
        self.sse_customer_key_md5 = Some(sse_customer_key_md5.into());
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
    pub fn tag_count(&self) -> Option<i32> {
        self.tag_count
    }

    #[must_use]
    pub fn with_tag_count(mut self, tag_count: i32) -> Self {
        self.tag_count = Some(tag_count);
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

impl fmt::Debug for GetObjectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetObjectResult")
            .field("accept_ranges", &self.accept_ranges)
            .field("body", &self.body)
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("cache_control", &self.cache_control)
            .field("checksum_crc32", &self.checksum_crc32)
            .field("checksum_crc32c", &self.checksum_crc32c)
            .field("checksum_crc64nvme", &self.checksum_crc64nvme)
            .field("checksum_sha1", &self.checksum_sha1)
            .field("checksum_sha256", &self.checksum_sha256)
            .field("checksum_type", &self.checksum_type)
            .field("content_disposition", &self.content_disposition)
            .field("content_encoding", &self.content_encoding)
            .field("content_language", &self.content_language)
            .field("content_length", &self.content_length)
            .field("content_range", &self.content_range)
            .field("content_type", &self.content_type)
            .field("delete_marker", &self.delete_marker)
            .field("e_tag", &self.e_tag)
            .field("expiration", &self.expiration)
            .field("expires", &self.expires)
            .field("last_modified", &self.last_modified)
            .field("metadata", &self.metadata)
            .field("missing_meta", &self.missing_meta)
            .field("object_lock_legal_hold_status", &self.object_lock_legal_hold_status)
            .field("object_lock_mode", &self.object_lock_mode)
            .field("object_lock_retain_until_date", &self.object_lock_retain_until_date)
            .field("parts_count", &self.parts_count)
            .field("replication_status", &self.replication_status)
            .field("request_charged", &self.request_charged)
            .field("restore", &self.restore)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .field("storage_class", &self.storage_class)
            .field("tag_count", &self.tag_count)
            .field("version_id", &self.version_id)
            .field("website_redirect_location", &self.website_redirect_location)
            .finish()
    }
}

/// Result of the `GetObjectTorrent` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectTorrentResult {
    /// Response body.
    pub body: Option<StreamingBlob>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl GetObjectTorrentResult {
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
    pub fn request_charged(&self) -> Option<RequestCharged> {
        self.request_charged
    }

    #[must_use]
    pub fn with_request_charged(mut self, request_charged: RequestCharged) -> Self {
        self.request_charged = Some(request_charged);
        self
    }
}

/// Result of the `HeadObject` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeadObjectResult {
    /// Header `accept-ranges`.
    pub accept_ranges: Option<String>,
    /// Header `x-amz-archive-status`.
    pub archive_status: Option<ArchiveStatus>,
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// Header `Cache-Control`.
    pub cache_control: Option<String>,
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
    /// Header `x-amz-checksum-type`.
    pub checksum_type: Option<ChecksumType>,
    /// Header `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// Header `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// Header `Content-Language`.
    pub content_language: Option<String>,
    /// Header `Content-Length`.
    pub content_length: Option<i64>,
    /// Header `Content-Range`.
    pub content_range: Option<String>,
    /// Header `Content-Type`.
    pub content_type: Option<String>,
    /// Header `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// Header `ETag`.
    pub e_tag: Option<String>,
    /// Header `x-amz-expiration`.
    pub expiration: Option<String>,
    /// Header `Expires`.
    pub expires: Option<String>,
    /// Header `Last-Modified`.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// Headers prefixed with `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// Header `x-amz-missing-meta`.
    pub missing_meta: Option<i32>,
    /// Header `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// Header `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// Header `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-mp-parts-count`.
    pub parts_count: Option<i32>,
    /// Header `x-amz-replication-status`.
    pub replication_status: Option<ReplicationStatus>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-restore`.
    pub restore: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// Header `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// Header `x-amz-tagging-count`.
    pub tag_count: Option<i32>,
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
    /// Header `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

impl HeadObjectResult {
    #[must_use]
    pub fn accept_ranges(&self) -> Option<&str> {
        self.accept_ranges.as_deref()
    }

    #[must_use]
    pub fn with_accept_ranges(mut self, accept_ranges: impl Into<String>) -> Self {
        self.accept_ranges = Some(accept_ranges.into());
        self
    }

    #[must_use]
    pub fn archive_status(&self) -> Option<ArchiveStatus> {
        self.archive_status
    }

    #[must_use]
    pub fn with_archive_status(mut self, archive_status: ArchiveStatus) -> Self {
        self.archive_status = Some(archive_status);
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
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    #[must_use]
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = Some(checksum_type);
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
    pub fn content_range(&self) -> Option<&str> {
        self.content_range.as_deref()
    }

    #[must_use]
    pub fn with_content_range(mut self, content_range: impl Into<String>) -> Self {
        self.content_range = Some(content_range.into());
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
    pub fn delete_marker(&self) -> Option<bool> {
        self.delete_marker
    }

    #[must_use]
    pub fn with_delete_marker(mut self, delete_marker: bool) -> Self {
        self.delete_marker = Some(delete_marker);
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn expiration(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    #[must_use]
    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
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
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
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
    pub fn missing_meta(&self) -> Option<i32> {
        self.missing_meta
    }

    #[must_use]
    pub fn with_missing_meta(mut self, missing_meta: i32) -> Self {
        self.missing_meta = Some(missing_meta);
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
    pub fn parts_count(&self) -> Option<i32> {
        self.parts_count
    }

    #[must_use]
    pub fn with_parts_count(mut self, parts_count: i32) -> Self {
        self.parts_count = Some(parts_count);
        self
    }

    #[must_use]
    pub fn replication_status(&self) -> Option<ReplicationStatus> {
        self.replication_status
    }

    #[must_use]
    pub fn with_replication_status(mut self, replication_status: ReplicationStatus) -> Self {
        self.replication_status = Some(replication_status);
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
    pub fn restore(&self) -> Option<&str> {
        self.restore.as_deref()
    }

    #[must_use]
    pub fn with_restore(mut self, restore: impl Into<String>) -> Self {
        self.restore = Some(restore.into());
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
    pub fn sse_customer_key_md5(&self) -> Option<&str> {
        self.sse_customer_key_md5.as_deref()
    }

    #[must_use]
    pub fn with_sse_customer_key_md5(mut self, sse_customer_key_md5: impl Into<String>) -> Self {
        self.sse_customer_key_md5 = Some(sse_customer_key_md5.into());
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
    pub fn tag_count(&self) -> Option<i32> {
        self.tag_count
    }

    #[must_use]
    pub fn with_tag_count(mut self, tag_count: i32) -> Self {
        self.tag_count = Some(tag_count);
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

impl fmt::Debug for HeadObjectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadObjectResult")
            .field("accept_ranges", &self.accept_ranges)
            .field("archive_status", &self.archive_status)
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("cache_control", &self.cache_control)
            .field("checksum_crc32", &self.checksum_crc32)
            .field("checksum_crc32c", &self.checksum_crc32c)
            .field("checksum_crc64nvme", &self.checksum_crc64nvme)
            .field("checksum_sha1", &self.checksum_sha1)
            .field("checksum_sha256", &self.checksum_sha256)
            .field("checksum_type", &self.checksum_type)
            .field("content_disposition", &self.content_disposition)
            .field("content_encoding", &self.content_encoding)
            .field("content_language", &self.content_language)
            .field("content_length", &self.content_length)
            .field("content_range", &self.content_range)
            .field("content_type", &self.content_type)
            .field("delete_marker", &self.delete_marker)
            .field("e_tag", &self.e_tag)
            .field("expiration", &self.expiration)
            .field("expires", &self.expires)
            .field("last_modified", &self.last_modified)
            .field("metadata", &self.metadata)
            .field("missing_meta", &self.missing_meta)
            .field("object_lock_legal_hold_status", &self.object_lock_legal_hold_status)
            .field("object_lock_mode", &self.object_lock_mode)
            .field("object_lock_retain_until_date", &self.object_lock_retain_until_date)
            .field("parts_count", &self.parts_count)
            .field("replication_status", &self.replication_status)
            .field("request_charged", &self.request_charged)
            .field("restore", &self.restore)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .field("storage_class", &self.storage_class)
            .field("tag_count", &self.tag_count)
            .field("version_id", &self.version_id)
            .field("website_redirect_location", &self.website_redirect_location)
            .finish()
    }
}

/// Result of the `PutObject` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PutObjectResult {
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
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
    /// Header `x-amz-checksum-type`.
    pub checksum_type: Option<ChecksumType>,
    /// Header `ETag`.
    pub e_tag: Option<String>,
    /// Header `x-amz-expiration`.
    pub expiration: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Header `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// Header `x-amz-object-size`.
    pub size: Option<i64>,
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl PutObjectResult {
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
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    #[must_use]
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = Some(checksum_type);
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn expiration(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    #[must_use]
    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
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
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
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

impl fmt::Debug for PutObjectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PutObjectResult")
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("checksum_crc32", &self.checksum_crc32)
            .field("checksum_crc32c", &self.checksum_crc32c)
            .field("checksum_crc64nvme", &self.checksum_crc64nvme)
            .field("checksum_sha1", &self.checksum_sha1)
            .field("checksum_sha256", &self.checksum_sha256)
            .field("checksum_type", &self.checksum_type)
            .field("e_tag", &self.e_tag)
            .field("expiration", &self.expiration)
            .field("request_charged", &self.request_charged)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field(
                "ssekms_encryption_context",
                &self.ssekms_encryption_context.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .field("size", &self.size)
            .field("version_id", &self.version_id)
            .finish()
    }
}

/// Result of the `RestoreObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreObjectResult {
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-restore-output-path`.
    pub restore_output_path: Option<String>,
}

impl RestoreObjectResult {
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
    pub fn restore_output_path(&self) -> Option<&str> {
        self.restore_output_path.as_deref()
    }

    #[must_use]
    pub fn with_restore_output_path(mut self, restore_output_path: impl Into<String>) -> Self {
        self.restore_output_path = Some(restore_output_path.into());
        self
    }
}
