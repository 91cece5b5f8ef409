//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use std::fmt;

use crate::types::{
    SENSITIVE_DATA_REDACTED, ChecksumAlgorithm, ChecksumType, CommonPrefix, CopyPartResultDetails,
    EncodingType, Initiator, MultipartUpload, Owner, Part, RequestCharged, ServerSideEncryption,
    StorageClass,
};

/// Result of the `AbortMultipartUpload` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbortMultipartUploadResult {
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl AbortMultipartUploadResult {
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

/// Result of the `CompleteMultipartUpload` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CompleteMultipartUploadResult {
    pub bucket: Option<String>,
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_crc64nvme: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
    pub checksum_type: Option<ChecksumType>,
    pub e_tag: Option<String>,
    /// Header `x-amz-expiration`.
    pub expiration: Option<String>,
    pub key: Option<String>,
    pub location: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl CompleteMultipartUploadResult {
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
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
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
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

impl fmt::Debug for CompleteMultipartUploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompleteMultipartUploadResult")
            .field("bucket", &self.bucket)
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("checksum_crc32", &self.checksum_crc32)
            .field("checksum_crc32c", &self.checksum_crc32c)
            .field("checksum_crc64nvme", &self.checksum_crc64nvme)
            .field("checksum_sha1", &self.checksum_sha1)
            .field("checksum_sha256", &self.checksum_sha256)
            .field("checksum_type", &self.checksum_type)
            .field("e_tag", &self.e_tag)
            .field("expiration", &self.expiration)
            .field("key", &self.key)
            .field("location", &self.location)
            .field("request_charged", &self.request_charged)
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .field("version_id", &self.version_id)
            .finish()
    }
}

/// Result of the `CreateMultipartUpload` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CreateMultipartUploadResult {
    /// Header `x-amz-abort-date`.
    pub abort_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-abort-rule-id`.
    pub abort_rule_id: Option<String>,
    pub bucket: Option<String>,
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// Header `x-amz-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Header `x-amz-checksum-type`.
    pub checksum_type: Option<ChecksumType>,
    pub key: Option<String>,
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
    pub upload_id: Option<String>,
}

impl CreateMultipartUploadResult {
    #[must_use]
    pub fn abort_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.abort_date
    }

    #[must_use]
    pub fn with_abort_date(mut self, abort_date: chrono::DateTime<chrono::Utc>) -> Self {
        self.abort_date = Some(abort_date);
        self
    }

    #[must_use]
    pub fn abort_rule_id(&self) -> Option<&str> {
        self.abort_rule_id.as_deref()
    }

    #[must_use]
    pub fn with_abort_rule_id(mut self, abort_rule_id: impl Into<String>) -> Self {
        self.abort_rule_id = Some(abort_rule_id.into());
        self
    }

    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
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
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
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
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    #[must_use]
    pub fn with_upload_id(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = Some(upload_id.into());
        self
    }
}

impl fmt::Debug for CreateMultipartUploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateMultipartUploadResult")
            .field("abort_date", &self.abort_date)
            .field("abort_rule_id", &self.abort_rule_id)
            .field("bucket", &self.bucket)
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("checksum_algorithm", &self.checksum_algorithm)
            .field("checksum_type", &self.checksum_type)
            .field("key", &self.key)
            .field("request_charged", &self.request_charged)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field(
                "ssekms_encryption_context",
                &self.ssekms_encryption_context.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .field("upload_id", &self.upload_id)
            .finish()
    }
}

/// Result of the `ListMultipartUploads` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMultipartUploadsResult {
    pub bucket: Option<String>,
    pub common_prefixes: Vec<CommonPrefix>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub key_marker: Option<String>,
    pub max_uploads: Option<i32>,
    pub next_key_marker: Option<String>,
    pub next_upload_id_marker: Option<String>,
    pub prefix: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub upload_id_marker: Option<String>,
    pub uploads: Vec<MultipartUpload>,
}

impl ListMultipartUploadsResult {
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

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
    pub fn max_uploads(&self) -> Option<i32> {
        self.max_uploads
    }

    #[must_use]
    pub fn with_max_uploads(mut self, max_uploads: i32) -> Self {
        self.max_uploads = Some(max_uploads);
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
    pub fn next_upload_id_marker(&self) -> Option<&str> {
        self.next_upload_id_marker.as_deref()
    }

    #[must_use]
    pub fn with_next_upload_id_marker(mut self, next_upload_id_marker: impl Into<String>) -> Self {
        self.next_upload_id_marker = Some(next_upload_id_marker.into());
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
    pub fn upload_id_marker(&self) -> Option<&str> {
        self.upload_id_marker.as_deref()
    }

    #[must_use]
    pub fn with_upload_id_marker(mut self, upload_id_marker: impl Into<String>) -> Self {
        self.upload_id_marker = Some(upload_id_marker.into());
        self
    }

    #[must_use]
    pub fn uploads(&self) -> &[MultipartUpload] {
        &self.uploads
    }

    #[must_use]
    pub fn with_uploads(mut self, uploads: impl IntoIterator<Item = MultipartUpload>) -> Self {
        self.uploads = uploads.into_iter().collect();
        self
    }
}

/// Result of the `ListParts` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPartsResult {
    /// Header `x-amz-abort-date`.
    pub abort_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Header `x-amz-abort-rule-id`.
    pub abort_rule_id: Option<String>,
    pub bucket: Option<String>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub checksum_type: Option<ChecksumType>,
    pub initiator: Option<Initiator>,
    pub is_truncated: Option<bool>,
    pub key: Option<String>,
    pub max_parts: Option<i32>,
    pub next_part_number_marker: Option<String>,
    pub owner: Option<Owner>,
    pub part_number_marker: Option<String>,
    pub parts: Vec<Part>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub storage_class: Option<StorageClass>,
    pub upload_id: Option<String>,
}

impl ListPartsResult {
    #[must_use]
    pub fn abort_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.abort_date
    }

    #[must_use]
    pub fn with_abort_date(mut self, abort_date: chrono::DateTime<chrono::Utc>) -> Self {
        self.abort_date = Some(abort_date);
        self
    }

    #[must_use]
    pub fn abort_rule_id(&self) -> Option<&str> {
        self.abort_rule_id.as_deref()
    }

    #[must_use]
    pub fn with_abort_rule_id(mut self, abort_rule_id: impl Into<String>) -> Self {
        self.abort_rule_id = Some(abort_rule_id.into());
        self
    }

    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
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
    pub fn initiator(&self) -> Option<&Initiator> {
        self.initiator.as_ref()
    }

    #[must_use]
    pub fn with_initiator(mut self, initiator: Initiator) -> Self {
        self.initiator = Some(initiator);
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
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
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
    pub fn next_part_number_marker(&self) -> Option<&str> {
        self.next_part_number_marker.as_deref()
    }

    #[must_use]
    pub fn with_next_part_number_marker(
        mut self,
        next_part_number_marker: impl Into<String>,
    ) -> Self {
        self.next_part_number_marker = Some(next_part_number_marker.into());
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
    pub fn part_number_marker(&self) -> Option<&str> {
        self.part_number_marker.as_deref()
    }

    #[must_use]
    pub fn with_part_number_marker(mut self, part_number_marker: impl Into<String>) -> Self {
        self.part_number_marker = Some(part_number_marker.into());
        self
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[must_use]
    pub fn with_parts(mut self, parts: impl IntoIterator<Item = Part>) -> Self {
        self.parts = parts.into_iter().collect();
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
    pub fn storage_class(&self) -> Option<StorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    #[must_use]
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    #[must_use]
    pub fn with_upload_id(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = Some(upload_id.into());
        self
    }
}

/// Result of the `UploadPartCopy` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadPartCopyResult {
    /// Header `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// Response body.
    pub copy_part_result: Option<CopyPartResultDetails>,
    /// Header `x-amz-copy-source-version-id`.
    pub copy_source_version_id: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
}

impl UploadPartCopyResult {
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
    pub fn copy_part_result(&self) -> Option<&CopyPartResultDetails> {
        self.copy_part_result.as_ref()
    }

    #[must_use]
    pub fn with_copy_part_result(mut self, copy_part_result: CopyPartResultDetails) -> Self {
        self.copy_part_result = Some(copy_part_result);
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
}

impl fmt::Debug for UploadPartCopyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadPartCopyResult")
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("copy_part_result", &self.copy_part_result)
            .field("copy_source_version_id", &self.copy_source_version_id)
            .field("request_charged", &self.request_charged)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .finish()
    }
}

/// Result of the `UploadPart` operation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadPartResult {
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
    /// Header `ETag`.
    pub e_tag: Option<String>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// Header `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// Header `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// Header `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// Header `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
}

impl UploadPartResult {
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
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
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
}

impl fmt::Debug for UploadPartResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadPartResult")
            .field("bucket_key_enabled", &self.bucket_key_enabled)
            .field("checksum_crc32", &self.checksum_crc32)
            .field("checksum_crc32c", &self.checksum_crc32c)
            .field("checksum_crc64nvme", &self.checksum_crc64nvme)
            .field("checksum_sha1", &self.checksum_sha1)
            .field("checksum_sha256", &self.checksum_sha256)
            .field("e_tag", &self.e_tag)
            .field("request_charged", &self.request_charged)
            .field("sse_customer_algorithm", &self.sse_customer_algorithm)
            .field("sse_customer_key_md5", &self.sse_customer_key_md5)
            .field("ssekms_key_id", &self.ssekms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("server_side_encryption", &self.server_side_encryption)
            .finish()
    }
}
