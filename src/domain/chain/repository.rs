//! Configuration store trait

use async_trait::async_trait;

use super::FallbackConfig;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Durable home of the fallback configuration
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the persisted configuration, `None` when nothing was saved yet
    async fn load(&self) -> Result<Option<FallbackConfig>, DomainError>;

    /// Overwrite the persisted configuration
    async fn save(&self, config: &FallbackConfig) -> Result<(), DomainError>;
}
