//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::{
    AnalyticsConfiguration, IntelligentTieringConfiguration, InventoryConfiguration,
    MetricsConfiguration,
};

/// Request parameters for the `DeleteBucketAnalyticsConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketAnalyticsConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl DeleteBucketAnalyticsConfigurationRequest {
    /// Creates a `DeleteBucketAnalyticsConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `DeleteBucketIntelligentTieringConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketIntelligentTieringConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl DeleteBucketIntelligentTieringConfigurationRequest {
    /// Creates a `DeleteBucketIntelligentTieringConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `DeleteBucketInventoryConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketInventoryConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl DeleteBucketInventoryConfigurationRequest {
    /// Creates a `DeleteBucketInventoryConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `DeleteBucketMetricsConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketMetricsConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl DeleteBucketMetricsConfigurationRequest {
    /// Creates a `DeleteBucketMetricsConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `GetBucketAnalyticsConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketAnalyticsConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl GetBucketAnalyticsConfigurationRequest {
    /// Creates a `GetBucketAnalyticsConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `GetBucketIntelligentTieringConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketIntelligentTieringConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl GetBucketIntelligentTieringConfigurationRequest {
    /// Creates a `GetBucketIntelligentTieringConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `GetBucketInventoryConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketInventoryConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl GetBucketInventoryConfigurationRequest {
    /// Creates a `GetBucketInventoryConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `GetBucketMetricsConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketMetricsConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl GetBucketMetricsConfigurationRequest {
    /// Creates a `GetBucketMetricsConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `ListBucketAnalyticsConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketAnalyticsConfigurationsRequest {
    /// URI path label.
    pub bucket: String,
    /// Query parameter `continuation-token`.
    pub continuation_token: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl ListBucketAnalyticsConfigurationsRequest {
    /// Creates a `ListBucketAnalyticsConfigurationsRequest` from its required members.
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
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `ListBucketIntelligentTieringConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketIntelligentTieringConfigurationsRequest {
    /// URI path label.
    pub bucket: String,
    /// Query parameter `continuation-token`.
    pub continuation_token: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl ListBucketIntelligentTieringConfigurationsRequest {
    /// Creates a `ListBucketIntelligentTieringConfigurationsRequest` from its required members.
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
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `ListBucketInventoryConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketInventoryConfigurationsRequest {
    /// URI path label.
    pub bucket: String,
    /// Query parameter `continuation-token`.
    pub continuation_token: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl ListBucketInventoryConfigurationsRequest {
    /// Creates a `ListBucketInventoryConfigurationsRequest` from its required members.
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
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `ListBucketMetricsConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketMetricsConfigurationsRequest {
    /// URI path label.
    pub bucket: String,
    /// Query parameter `continuation-token`.
    pub continuation_token: Option<String>,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl ListBucketMetricsConfigurationsRequest {
    /// Creates a `ListBucketMetricsConfigurationsRequest` from its required members.
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
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }
}

/// Request parameters for the `PutBucketAnalyticsConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketAnalyticsConfigurationRequest {
    /// Request body.
    pub analytics_configuration: AnalyticsConfiguration,
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
}

impl PutBucketAnalyticsConfigurationRequest {
    /// Creates a `PutBucketAnalyticsConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(
        analytics_configuration: AnalyticsConfiguration,
        bucket: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            analytics_configuration,
            bucket: bucket.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn analytics_configuration(&self) -> &AnalyticsConfiguration {
        &self.analytics_configuration
    }

    #[must_use]
    pub fn with_analytics_configuration(
        mut self,
        analytics_configuration: AnalyticsConfiguration,
    ) -> Self {
        self.analytics_configuration = analytics_configuration;
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
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }

    #[must_use]
    pub fn with_expected_bucket_owner(mut self, expected_bucket_owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(expected_bucket_owner.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request parameters for the `PutBucketIntelligentTieringConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketIntelligentTieringConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
    /// Request body.
    pub intelligent_tiering_configuration: IntelligentTieringConfiguration,
}

impl PutBucketIntelligentTieringConfigurationRequest {
    /// Creates a `PutBucketIntelligentTieringConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        id: impl Into<String>,
        intelligent_tiering_configuration: IntelligentTieringConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
            intelligent_tiering_configuration,
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn intelligent_tiering_configuration(&self) -> &IntelligentTieringConfiguration {
        &self.intelligent_tiering_configuration
    }

    #[must_use]
    pub fn with_intelligent_tiering_configuration(
        mut self,
        intelligent_tiering_configuration: IntelligentTieringConfiguration,
    ) -> Self {
        self.intelligent_tiering_configuration = intelligent_tiering_configuration;
        self
    }
}

/// Request parameters for the `PutBucketInventoryConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketInventoryConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
    /// Request body.
    pub inventory_configuration: InventoryConfiguration,
}

impl PutBucketInventoryConfigurationRequest {
    /// Creates a `PutBucketInventoryConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        id: impl Into<String>,
        inventory_configuration: InventoryConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
            inventory_configuration,
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn inventory_configuration(&self) -> &InventoryConfiguration {
        &self.inventory_configuration
    }

    #[must_use]
    pub fn with_inventory_configuration(
        mut self,
        inventory_configuration: InventoryConfiguration,
    ) -> Self {
        self.inventory_configuration = inventory_configuration;
        self
    }
}

/// Request parameters for the `PutBucketMetricsConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketMetricsConfigurationRequest {
    /// URI path label.
    pub bucket: String,
    /// Header `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// Query parameter `id`.
    pub id: String,
    /// Request body.
    pub metrics_configuration: MetricsConfiguration,
}

impl PutBucketMetricsConfigurationRequest {
    /// Creates a `PutBucketMetricsConfigurationRequest` from its required members.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        id: impl Into<String>,
        metrics_configuration: MetricsConfiguration,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
            metrics_configuration,
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
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn metrics_configuration(&self) -> &MetricsConfiguration {
        &self.metrics_configuration
    }

    #[must_use]
    pub fn with_metrics_configuration(
        mut self,
        metrics_configuration: MetricsConfiguration,
    ) -> Self {
        self.metrics_configuration = metrics_configuration;
        self
    }
}
