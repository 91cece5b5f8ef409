//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::{
    AnalyticsConfiguration, IntelligentTieringConfiguration, InventoryConfiguration,
    MetricsConfiguration,
};

/// Result of the `GetBucketAnalyticsConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketAnalyticsConfigurationResult {
    /// Response body.
    pub analytics_configuration: Option<AnalyticsConfiguration>,
}

impl GetBucketAnalyticsConfigurationResult {
    #[must_use]
    pub fn analytics_configuration(&self) -> Option<&AnalyticsConfiguration> {
        self.analytics_configuration.as_ref()
    }

    #[must_use]
    pub fn with_analytics_configuration(
        mut self,
        analytics_configuration: AnalyticsConfiguration,
    ) -> Self {
        self.analytics_configuration = Some(analytics_configuration);
        self
    }
}

/// Result of the `GetBucketIntelligentTieringConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketIntelligentTieringConfigurationResult {
    /// Response body.
    pub intelligent_tiering_configuration: Option<IntelligentTieringConfiguration>,
}

impl GetBucketIntelligentTieringConfigurationResult {
    #[must_use]
    pub fn intelligent_tiering_configuration(&self) -> Option<&IntelligentTieringConfiguration> {
        self.intelligent_tiering_configuration.as_ref()
    }

    #[must_use]
    pub fn with_intelligent_tiering_configuration(
        mut self,
        intelligent_tiering_configuration: IntelligentTieringConfiguration,
    ) -> Self {
        self.intelligent_tiering_configuration = Some(intelligent_tiering_configuration);
        self
    }
}

/// Result of the `GetBucketInventoryConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketInventoryConfigurationResult {
    /// Response body.
    pub inventory_configuration: Option<InventoryConfiguration>,
}

impl GetBucketInventoryConfigurationResult {
    #[must_use]
    pub fn inventory_configuration(&self) -> Option<&InventoryConfiguration> {
        self.inventory_configuration.as_ref()
    }

    #[must_use]
    pub fn with_inventory_configuration(
        mut self,
        inventory_configuration: InventoryConfiguration,
    ) -> Self {
        self.inventory_configuration = Some(inventory_configuration);
        self
    }
}

/// Result of the `GetBucketMetricsConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketMetricsConfigurationResult {
    /// Response body.
    pub metrics_configuration: Option<MetricsConfiguration>,
}

impl GetBucketMetricsConfigurationResult {
    #[must_use]
    pub fn metrics_configuration(&self) -> Option<&MetricsConfiguration> {
        self.metrics_configuration.as_ref()
    }

    #[must_use]
    pub fn with_metrics_configuration(
        mut self,
        metrics_configuration: MetricsConfiguration,
    ) -> Self {
        self.metrics_configuration = Some(metrics_configuration);
        self
    }
}

/// Result of the `ListBucketAnalyticsConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketAnalyticsConfigurationsResult {
    pub analytics_configuration_list: Vec<AnalyticsConfiguration>,
    pub continuation_token: Option<String>,
    pub is_truncated: Option<bool>,
    pub next_continuation_token: Option<String>,
}

impl ListBucketAnalyticsConfigurationsResult {
    #[must_use]
    pub fn analytics_configuration_list(&self) -> &[AnalyticsConfiguration] {
        &self.analytics_configuration_list
    }

    #[must_use]
    pub fn with_analytics_configuration_list(
        mut self,
        analytics_configuration_list: impl IntoIterator<Item = AnalyticsConfiguration>,
    ) -> Self {
        self.analytics_configuration_list = analytics_configuration_list.into_iter().collect();
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
    pub fn is_truncated(&self) -> Option<bool> {
        self.is_truncated
    }

    #[must_use]
    pub fn with_is_truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = Some(is_truncated);
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
}

/// Result of the `ListBucketIntelligentTieringConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketIntelligentTieringConfigurationsResult {
    pub continuation_token: Option<String>,
    pub intelligent_tiering_configuration_list: Vec<IntelligentTieringConfiguration>,
    pub is_truncated: Option<bool>,
    pub next_continuation_token: Option<String>,
}

impl ListBucketIntelligentTieringConfigurationsResult {
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
    pub fn intelligent_tiering_configuration_list(&self) -> &[IntelligentTieringConfiguration] {
        &self.intelligent_tiering_configuration_list
    }

    #[must_use]
    pub fn with_intelligent_tiering_configuration_list(
        mut self,
        intelligent_tiering_configuration_list: impl IntoIterator<Item = IntelligentTieringConfiguration>,
    ) -> Self {
        self.intelligent_tiering_configuration_list = intelligent_tiering_configuration_list.into_iter().collect();
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
}

/// Result of the `ListBucketInventoryConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketInventoryConfigurationsResult {
    pub continuation_token: Option<String>,
    pub inventory_configuration_list: Vec<InventoryConfiguration>,
    pub is_truncated: Option<bool>,
    pub next_continuation_token: Option<String>,
}

impl ListBucketInventoryConfigurationsResult {
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
    pub fn inventory_configuration_list(&self) -> &[InventoryConfiguration] {
        &self.inventory_configuration_list
    }

    #[must_use]
    pub fn with_inventory_configuration_list(
        mut self,
        inventory_configuration_list: impl IntoIterator<Item = InventoryConfiguration>,
    ) -> Self {
        self.inventory_configuration_list = inventory_configuration_list.into_iter().collect();
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
}

/// Result of the `ListBucketMetricsConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketMetricsConfigurationsResult {
    pub continuation_token: Option<String>,
    pub is_truncated: Option<bool>,
    pub metrics_configuration_list: Vec<MetricsConfiguration>,
    pub next_continuation_token: Option<String>,
}

impl ListBucketMetricsConfigurationsResult {
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
    pub fn is_truncated(&self) -> Option<bool> {
        self.is_truncated
    }

    #[must_use]
    pub fn with_is_truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = Some(is_truncated);
        self
    }

    #[must_use]
    pub fn metrics_configuration_list(&self) -> &[MetricsConfiguration] {
        &self.metrics_configuration_list
    }

    #[must_use]
    pub fn with_metrics_configuration_list(
        mut self,
        metrics_configuration_list: impl IntoIterator<Item = MetricsConfiguration>,
    ) -> Self {
        self.metrics_configuration_list = metrics_configuration_list.into_iter().collect();
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
}
