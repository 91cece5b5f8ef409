//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::{
    BucketAccelerateStatus, BucketVersioningStatus, CORSRule, Checksum, ErrorDocument,
    GetObjectAttributesParts, Grant, IndexDocument, LifecycleRule, LoggingEnabled, MFADeleteStatus,
    NotificationConfiguration, ObjectLockConfiguration, ObjectLockLegalHold, ObjectLockRetention,
    Owner, OwnershipControls, Payer, PolicyStatus, PublicAccessBlockConfiguration,
    RedirectAllRequestsTo, ReplicationConfiguration, RequestCharged, RoutingRule,
    ServerSideEncryptionConfiguration, StorageClass, Tag, TransitionDefaultMinimumObjectSize,
};

/// Result of the `DeleteObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectTaggingResult {
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl DeleteObjectTaggingResult {
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

/// Result of the `GetBucketAccelerateConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketAccelerateConfigurationResult {
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub status: Option<BucketAccelerateStatus>,
}

impl GetBucketAccelerateConfigurationResult {
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
    pub fn status(&self) -> Option<BucketAccelerateStatus> {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: BucketAccelerateStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Result of the `GetBucketAcl` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketAclResult {
    pub grants: Vec<Grant>,
    pub owner: Option<Owner>,
}

impl GetBucketAclResult {
    #[must_use]
    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    #[must_use]
    pub fn with_grants(mut self, grants: impl IntoIterator<Item = Grant>) -> Self {
        self.grants = grants.into_iter().collect();
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
}

/// Result of the `GetBucketCors` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketCorsResult {
    pub cors_rules: Vec<CORSRule>,
}

impl GetBucketCorsResult {
    #[must_use]
    pub fn cors_rules(&self) -> &[CORSRule] {
        &self.cors_rules
    }

    #[must_use]
    pub fn with_cors_rules(mut self, cors_rules: impl IntoIterator<Item = CORSRule>) -> Self {
        self.cors_rules = cors_rules.into_iter().collect();
        self
    }
}

/// Result of the `GetBucketEncryption` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketEncryptionResult {
    /// Response body.
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
}

impl GetBucketEncryptionResult {
    #[must_use]
    pub fn server_side_encryption_configuration(
        &self,
    ) -> Option<&ServerSideEncryptionConfiguration> {
        self.server_side_encryption_configuration.as_ref()
    }

    #[must_use]
    pub fn with_server_side_encryption_configuration(
        mut self,
        server_side_encryption_configuration: ServerSideEncryptionConfiguration,
    ) -> Self {
        self.server_side_encryption_configuration = Some(server_side_encryption_configuration);
        self
    }
}

/// Result of the `GetBucketLifecycleConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketLifecycleConfigurationResult {
    pub rules: Vec<LifecycleRule>,
    /// Header `x-amz-transition-default-minimum-object-size`.
    pub transition_default_minimum_object_size: Option<TransitionDefaultMinimumObjectSize>,
}

impl GetBucketLifecycleConfigurationResult {
    #[must_use]
    pub fn rules(&self) -> &[LifecycleRule] {
        &self.rules
    }

    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = LifecycleRule>) -> Self {
        self.rules = rules.into_iter().collect();
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

/// Result of the `GetBucketLogging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketLoggingResult {
    pub logging_enabled: Option<LoggingEnabled>,
}

impl GetBucketLoggingResult {
    #[must_use]
    pub fn logging_enabled(&self) -> Option<&LoggingEnabled> {
        self.logging_enabled.as_ref()
    }

    #[must_use]
    pub fn with_logging_enabled(mut self, logging_enabled: LoggingEnabled) -> Self {
        self.logging_enabled = Some(logging_enabled);
        self
    }
}

/// Result of the `GetBucketNotificationConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketNotificationConfigurationResult {
    /// The notification configuration for the bucket.
    pub notification_configuration: Option<NotificationConfiguration>,
}

impl GetBucketNotificationConfigurationResult {
    #[must_use]
    pub fn notification_configuration(&self) -> Option<&NotificationConfiguration> {
        self.notification_configuration.as_ref()
    }

    #[must_use]
    pub fn with_notification_configuration(
        mut self,
        notification_configuration: NotificationConfiguration,
    ) -> Self {
        self.notification_configuration = Some(notification_configuration);
        self
    }
}

/// Result of the `GetBucketOwnershipControls` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketOwnershipControlsResult {
    /// Response body.
    pub ownership_controls: Option<OwnershipControls>,
}

impl GetBucketOwnershipControlsResult {
    #[must_use]
    pub fn ownership_controls(&self) -> Option<&OwnershipControls> {
        self.ownership_controls.as_ref()
    }

    #[must_use]
    pub fn with_ownership_controls(mut self, ownership_controls: OwnershipControls) -> Self {
        self.ownership_controls = Some(ownership_controls);
        self
    }
}

/// Result of the `GetBucketPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketPolicyResult {
    /// Response body.
    pub policy: Option<String>,
}

impl GetBucketPolicyResult {
    #[must_use]
    pub fn policy(&self) -> Option<&str> {
        self.policy.as_deref()
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }
}

/// Result of the `GetBucketPolicyStatus` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketPolicyStatusResult {
    /// Response body.
    pub policy_status: Option<PolicyStatus>,
}

impl GetBucketPolicyStatusResult {
    #[must_use]
    pub fn policy_status(&self) -> Option<&PolicyStatus> {
        self.policy_status.as_ref()
    }

    #[must_use]
    pub fn with_policy_status(mut self, policy_status: PolicyStatus) -> Self {
        self.policy_status = Some(policy_status);
        self
    }
}

/// Result of the `GetBucketReplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketReplicationResult {
    /// Response body.
    pub replication_configuration: Option<ReplicationConfiguration>,
}

impl GetBucketReplicationResult {
    #[must_use]
    pub fn replication_configuration(&self) -> Option<&ReplicationConfiguration> {
        self.replication_configuration.as_ref()
    }

    #[must_use]
    pub fn with_replication_configuration(
        mut self,
        replication_configuration: ReplicationConfiguration,
    ) -> Self {
        self.replication_configuration = Some(replication_configuration);
        self
    }
}

/// Result of the `GetBucketRequestPayment` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketRequestPaymentResult {
    pub payer: Option<Payer>,
}

impl GetBucketRequestPaymentResult {
    #[must_use]
    pub fn payer(&self) -> Option<Payer> {
        self.payer
    }

    #[must_use]
    pub fn with_payer(mut self, payer: Payer) -> Self {
        self.payer = Some(payer);
        self
    }
}

/// Result of the `GetBucketTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketTaggingResult {
    pub tag_set: Vec<Tag>,
}

impl GetBucketTaggingResult {
    #[must_use]
    pub fn tag_set(&self) -> &[Tag] {
        &self.tag_set
    }

    #[must_use]
    pub fn with_tag_set(mut self, tag_set: impl IntoIterator<Item = Tag>) -> Self {
        self.tag_set = tag_set.into_iter().collect();
        self
    }
}

/// Result of the `GetBucketVersioning` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketVersioningResult {
    pub mfa_delete: Option<MFADeleteStatus>,
    pub status: Option<BucketVersioningStatus>,
}

impl GetBucketVersioningResult {
    #[must_use]
    pub fn mfa_delete(&self) -> Option<MFADeleteStatus> {
        self.mfa_delete
    }

    #[must_use]
    pub fn with_mfa_delete(mut self, mfa_delete: MFADeleteStatus) -> Self {
        self.mfa_delete = Some(mfa_delete);
        self
    }

    #[must_use]
    pub fn status(&self) -> Option<BucketVersioningStatus> {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: BucketVersioningStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Result of the `GetBucketWebsite` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketWebsiteResult {
    pub error_document: Option<ErrorDocument>,
    pub index_document: Option<IndexDocument>,
    pub redirect_all_requests_to: Option<RedirectAllRequestsTo>,
    pub routing_rules: Vec<RoutingRule>,
}

impl GetBucketWebsiteResult {
    #[must_use]
    pub fn error_document(&self) -> Option<&ErrorDocument> {
        self.error_document.as_ref()
    }

    #[must_use]
    pub fn with_error_document(mut self, error_document: ErrorDocument) -> Self {
        self.error_document = Some(error_document);
        self
    }

    #[must_use]
    pub fn index_document(&self) -> Option<&IndexDocument> {
        self.index_document.as_ref()
    }

    #[must_use]
    pub fn with_index_document(mut self, index_document: IndexDocument) -> Self {
        self.index_document = Some(index_document);
        self
    }

    #[must_use]
    pub fn redirect_all_requests_to(&self) -> Option<&RedirectAllRequestsTo> {
        self.redirect_all_requests_to.as_ref()
    }

    #[must_use]
    pub fn with_redirect_all_requests_to(
        mut self,
        redirect_all_requests_to: RedirectAllRequestsTo,
    ) -> Self {
        self.redirect_all_requests_to = Some(redirect_all_requests_to);
        self
    }

    #[must_use]
    pub fn routing_rules(&self) -> &[RoutingRule] {
        &self.routing_rules
    }

    #[must_use]
    pub fn with_routing_rules(
        mut self,
        routing_rules: impl IntoIterator<Item = RoutingRule>,
    ) -> Self {
        self.routing_rules = routing_rules.into_iter().collect();
        self
    }
}

/// Result of the `GetObjectAcl` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectAclResult {
    pub grants: Vec<Grant>,
    pub owner: Option<Owner>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl GetObjectAclResult {
    #[must_use]
    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    #[must_use]
    pub fn with_grants(mut self, grants: impl IntoIterator<Item = Grant>) -> Self {
        self.grants = grants.into_iter().collect();
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
    pub fn request_charged(&self) -> Option<RequestCharged> {
        self.request_charged
    }

    #[must_use]
    pub fn with_request_charged(mut self, request_charged: RequestCharged) -> Self {
        self.request_charged = Some(request_charged);
        self
    }
}

/// Result of the `GetObjectAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectAttributesResult {
    pub checksum: Option<Checksum>,
    /// Header `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    pub e_tag: Option<String>,
    /// Header `Last-Modified`.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub object_parts: Option<GetObjectAttributesParts>,
    pub object_size: Option<i64>,
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub storage_class: Option<StorageClass>,
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl GetObjectAttributesResult {
    #[must_use]
    pub fn checksum(&self) -> Option<&Checksum> {
        self.checksum.as_ref()
    }

    #[must_use]
    pub fn with_checksum(mut self, checksum: Checksum) -> Self {
        self.checksum = Some(checksum);
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
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    #[must_use]
    pub fn object_parts(&self) -> Option<&GetObjectAttributesParts> {
        self.object_parts.as_ref()
    }

    #[must_use]
    pub fn with_object_parts(mut self, object_parts: GetObjectAttributesParts) -> Self {
        self.object_parts = Some(object_parts);
        self
    }

    #[must_use]
    pub fn object_size(&self) -> Option<i64> {
        self.object_size
    }

    #[must_use]
    pub fn with_object_size(mut self, object_size: i64) -> Self {
        self.object_size = Some(object_size);
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
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Result of the `GetObjectLegalHold` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectLegalHoldResult {
    /// Response body.
    pub legal_hold: Option<ObjectLockLegalHold>,
}

impl GetObjectLegalHoldResult {
    #[must_use]
    pub fn legal_hold(&self) -> Option<&ObjectLockLegalHold> {
        self.legal_hold.as_ref()
    }

    #[must_use]
    pub fn with_legal_hold(mut self, legal_hold: ObjectLockLegalHold) -> Self {
        self.legal_hold = Some(legal_hold);
        self
    }
}

/// Result of the `GetObjectLockConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectLockConfigurationResult {
    /// Response body.
    pub object_lock_configuration: Option<ObjectLockConfiguration>,
}

impl GetObjectLockConfigurationResult {
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
}

/// Result of the `GetObjectRetention` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectRetentionResult {
    /// Response body.
    pub retention: Option<ObjectLockRetention>,
}

impl GetObjectRetentionResult {
    #[must_use]
    pub fn retention(&self) -> Option<&ObjectLockRetention> {
        self.retention.as_ref()
    }

    #[must_use]
    pub fn with_retention(mut self, retention: ObjectLockRetention) -> Self {
        self.retention = Some(retention);
        self
    }
}

/// Result of the `GetObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectTaggingResult {
    pub tag_set: Vec<Tag>,
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl GetObjectTaggingResult {
    #[must_use]
    pub fn tag_set(&self) -> &[Tag] {
        &self.tag_set
    }

    #[must_use]
    pub fn with_tag_set(mut self, tag_set: impl IntoIterator<Item = Tag>) -> Self {
        self.tag_set = tag_set.into_iter().collect();
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

/// Result of the `GetPublicAccessBlock` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPublicAccessBlockResult {
    /// Response body.
    pub public_access_block_configuration: Option<PublicAccessBlockConfiguration>,
}

impl GetPublicAccessBlockResult {
    #[must_use]
    pub fn public_access_block_configuration(&self) -> Option<&PublicAccessBlockConfiguration> {
        self.public_access_block_configuration.as_ref()
    }

    #[must_use]
    pub fn with_public_access_block_configuration(
        mut self,
        public_access_block_configuration: PublicAccessBlockConfiguration,
    ) -> Self {
        self.public_access_block_configuration = Some(public_access_block_configuration);
        self
    }
}

/// Result of the `PutBucketLifecycleConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketLifecycleConfigurationResult {
    /// Header `x-amz-transition-default-minimum-object-size`.
    pub transition_default_minimum_object_size: Option<TransitionDefaultMinimumObjectSize>,
}

impl PutBucketLifecycleConfigurationResult {
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

/// Result of the `PutObjectAcl` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectAclResult {
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl PutObjectAclResult {
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

/// Result of the `PutObjectLegalHold` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectLegalHoldResult {
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl PutObjectLegalHoldResult {
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

/// Result of the `PutObjectLockConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectLockConfigurationResult {
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl PutObjectLockConfigurationResult {
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

/// Result of the `PutObjectRetention` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectRetentionResult {
    /// Header `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl PutObjectRetentionResult {
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

/// Result of the `PutObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectTaggingResult {
    /// Header `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl PutObjectTaggingResult {
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
