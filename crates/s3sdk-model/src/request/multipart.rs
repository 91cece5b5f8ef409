//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use std::collections::HashMap;
use std::fmt;

use crate::blob::StreamingBlob;
use crate::exception::DuplicateKeyError;
use crate::types::{
    SENSITIVE_DATA_REDACTED, ChecksumAlgorithm, ChecksumType, CompletedMultipartUpload,
    EncodingType, ObjectCannedACL, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer,
    ServerSideEncryption, StorageClass,
};

/// Request parameters for the `AbortMultipartUpload` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbortMultipartUploadRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `x-amz-if-match-initiated-time`.
    pub if_match_initiated_time: Option<chrono::DateTime<chrono::Utc>>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `uploadId`.
    pub upload_id: String,
}

impl AbortMultipartUploadRequest {
    /// Creates a `AbortMultipartUploadRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        upload_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            upload_id: upload_id.into(),
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
    pub fn if_match_initiated_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.if_match_initiated_time
    }

    #[must_use]
    pub fn with_if_match_initiated_time(
        mut self,
        if_match_initiated_time: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.if_match_initiated_time = Some(if_match_initiated_time);
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
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    #[must_use]
    pub fn with_upload_id(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = upload_id.into();
        self
    }
}

/// Request parameters for the `CompleteMultipartUpload` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CompleteMultipartUploadRequest {
    /// URI path label.
    pub bucket: String,
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
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Header `If-Match`.
    pub if_match: Option<String>,
    /// Header `If-None-Match`.
    pub if_none_match: Option<String>,
    /// URI path label.
    pub key: String,
    /// Header `x-amz-mp-object-size`.
    pub mpu_object_size: Option<i64>,
    /// Request body.
    pub multipart_upload: Option<CompletedMultipartUpload>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Query parameter `uploadId`.
    pub upload_id: String,
}

impl CompleteMultipartUploadRequest {
    /// Creates a `CompleteMultipartUploadRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        upload_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            upload_id: upload_id.into(),
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
    pub fn mpu_object_size(&self) -> Option<i64> {
        self.mpu_object_size
    }

    #[must_use]
    pub fn with_mpu_object_size(mut self, mpu_object_size: i64) -> Self {
        self.mpu_object_size = Some(mpu_object_size);
        self
    }

    #[must_use]
    pub fn multipart_upload(&self) -> Option<&CompletedMultipartUpload> {
        self.multipart_upload.as_ref()
    }

    #[must_use]
    pub fn with_multipart_upload(mut self, multipart_upload: CompletedMultipartUpload) -> Self {
        self.multipart_upload = Some(multipart_upload);
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
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    #[must_use]
    pub fn with_upload_id(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = upload_id.into();
        self
    }
}

impl fmt::Debug for CompleteMultipartUploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompleteMultipartUploadRequest")
            .field("bucket", &self.bucket)
            .field("checksum_crc32", &self.checksum_crc32)
            .field("checksum_crc32c", &self.checksum_crc32c)
            .field("checksum_crc64nvme", &self.checksum_crc64nvme)
            .field("checksum_sha1", &self.checksum_sha1)
            .field("checksum_sha256", &self.checksum_sha256)
            .field("checksum_type", &self.checksum_type)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("if_match", &self.if_match)
            .field("if_none_match", &self.if_none_match)
            .field("key", &self.key)
            .field("mpu_object_size", &self.mpu_object_size)
            .field("multipart_upload", &self.multipart_upload)
            .field("request_payer", &self.request_payer)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field(
                "sse_customer_key",
                &self.sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("upload_id", &self.upload_id)
            .finish()
    }
}

/// Request parameters for the `CreateMultipartUpload` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CreateMultipartUploadRequest {
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
    /// Header `x-amz-checksum-type`.
    pub checksum_type: Option<ChecksumType>,
    /// Header `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// Header `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// Header `Content-Language`.
    pub content_language: Option<String>,
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
}

impl CreateMultipartUploadRequest {
    /// Creates a `CreateMultipartUploadRequest` from its required members.
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
}

impl fmt::Debug for CreateMultipartUploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateMultipartUploadRequest")
            .field("acl", &self.acl)
            .field("bucket", &self.bucket)
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("cache_control", &self.cache_control)
            .field("checksum_algorithm", &self.checksum_algorithm)
            .field("checksum_type", &self.checksum_type)
            .field("content_disposition", &self.content_disposition)
            .field("content_encoding", &self.content_encoding)
            .field("content_language", &self.content_language)
            .field("content_type", &self.content_type)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("expires", &self.expires)
            .field("grant_full_control", &self.grant_full_control)
            .field("grant_read", &self.grant_read)
            .field("grant_read_acp", &self.grant_read_acp)
            .field("grant_write_acp", &self.grant_write_acp)
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
            .finish()
    }
}

/// Request parameters for the `ListMultipartUploads` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMultipartUploadsRequest {
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
    /// Query parameter `max-uploads`.
    pub max_uploads: Option<i32>,
    /// Query parameter `prefix`.
    pub prefix: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Query parameter `upload-id-marker`.
    pub upload_id_marker: Option<String>,
}

impl ListMultipartUploadsRequest {
    /// Creates a `ListMultipartUploadsRequest` from its required members.
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
    pub fn max_uploads(&self) -> Option<i32> {
        self.max_uploads
    }

    #[must_use]
    pub fn with_max_uploads(mut self, max_uploads: i32) -> Self {
        self.max_uploads = Some(max_uploads);
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
    pub fn upload_id_marker(&self) -> Option<&str> {
        self.upload_id_marker.as_deref()
    }

    #[must_use]
    pub fn with_upload_id_marker(mut self, upload_id_marker: impl Into<String>) -> Self {
        self.upload_id_marker = Some(upload_id_marker.into());
        self
    }
}

/// Request parameters for the `ListParts` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ListPartsRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Query parameter `max-parts`.
    pub max_parts: Option<i32>,
    /// Query parameter `part-number-marker`.
    pub part_number_marker: Option<String>,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Query parameter `uploadId`.
    pub upload_id: String,
}

impl ListPartsRequest {
    /// Creates a `ListPartsRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        upload_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            upload_id: upload_id.into(),
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
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    #[must_use]
    pub fn with_upload_id(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = upload_id.into();
        self
    }
}

impl fmt::Debug for ListPartsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListPartsRequest")
            .field("bucket", &self.bucket)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("key", &self.key)
            .field("max_parts", &self.max_parts)
            .field("part_number_marker", &self.part_number_marker)
            .field("request_payer", &self.request_payer)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field(
                "sse_customer_key",
                &self.sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("upload_id", &self.upload_id)
            .finish()
    }
}

/// Request parameters for the `UploadPartCopy` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadPartCopyRequest {
    /// URI path label.
    pub bucket: String,
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
    /// Header `x-amz-copy-source-range`.
    pub copy_source_range: Option<String>,
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
    /// URI path label.
    pub key: String,
    /// Query parameter `partNumber`.
    pub part_number: i32,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Query parameter `uploadId`.
    pub upload_id: String,
}

impl UploadPartCopyRequest {
    /// Creates a `UploadPartCopyRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        copy_source: impl Into<String>,
        key: impl Into<String>,
        part_number: i32,
        upload_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            copy_source: copy_source.into(),
            key: key.into(),
            part_number,
            upload_id: upload_id.into(),
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
    pub fn copy_source_range(&self) -> Option<&str> {
        self.copy_source_range.as_deref()
    }

    #[must_use]
    pub fn with_copy_source_range(mut self, copy_source_range: impl Into<String>) -> Self {
        self.copy_source_range = Some(copy_source_range.into());
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
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn part_number(&self) -> i32 {
        self.part_number
    }

    #[must_use]
    pub fn with_part_number(mut self, part_number: i32) -> Self {
        self.part_number = part_number;
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
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    #[must_use]
    pub fn with_upload_id(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = upload_id.into();
        self
    }
}

impl fmt::Debug for UploadPartCopyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadPartCopyRequest")
            .field("bucket", &self.bucket)
            .field("copy_source", &self.copy_source)
            .field("copy_source_if_match", &self.copy_source_if_match)
            .field("copy_source_if_modified_since", &self.copy_source_if_modified_since)
            .field("copy_source_if_none_match", &self.copy_source_if_none_match)
            .field("copy_source_if_unmodified_since", &self.copy_source_if_unmodified_since)
            .field("copy_source_range", &self.copy_source_range)
            .field("copy_source_sse_customer_algorithm", &self.copy_source_sse_customer_algorithm)
            .field(
                "copy_source_sse_customer_key",
                &self.copy_source_sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("copy_source_sse_customer_key_md5", &self.copy_source_sse_customer_key_md5)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("expected_source_bucket_owner", &self.expected_source_bucket_owner)
            .field("key", &self.key)
            .field("part_number", &self.part_number)
            .field("request_payer", &self.request_payer)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field(
                "sse_customer_key",
                &self.sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("upload_id", &self.upload_id)
            .finish()
    }
}

/// Request parameters for the `UploadPart` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadPartRequest {
    /// Request body.
    pub body: Option<StreamingBlob>,
    /// URI path label.
    pub bucket: String,
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
    /// Header `Content-Length`.
    pub content_length: Option<i64>,
    /// Header `Content-MD5`.
    pub content_md5: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// URI path label.
    pub key: String,
    /// Query parameter `partNumber`.
    pub part_number: i32,
    /// Header `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Query parameter `uploadId`.
    pub upload_id: String,
}

impl UploadPartRequest {
    /// Creates a `UploadPartRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        part_number: i32,
        upload_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            part_number,
            upload_id: upload_id.into(),
            ..Default::default()
        }
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
    pub fn part_number(&self) -> i32 {
        self.part_number
    }

    #[must_use]
    pub fn with_part_number(mut self, part_number: i32) -> Self {
        self.part_number = part_number;
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
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    #[must_use]
    pub fn with_upload_id(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = upload_id.into();
        self
    }
}

impl fmt::Debug for UploadPartRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadPartRequest")
            .field("body", &self.body)
            .field("bucket", &self.bucket)
            .field("checksum_algorithm", &self.checksum_algorithm)
            .field("checksum_crc32", &self.checksum_crc32)
            .field("checksum_crc32c", &self.checksum_crc32c)
            .field("checksum_crc64nvme", &self.checksum_crc64nvme)
            .field("checksum_sha1", &self.checksum_sha1)
            .field("checksum_sha256", &self.checksum_sha256)
            .field("content_length", &self.content_length)
            .field("content_md5", &self.content_md5)
            .field("expected_bucket_owner", &self.expected_bucket_owner)
            .field("key", &self.key)
            .field("part_number", &self.part_number)
            .field("request_payer", &self.request_payer)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field(
                "sse_customer_key",
                &self.sse_customer_key.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("upload_id", &self.upload_id)
            .finish()
    }
}
