//! In-memory configuration store

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{ConfigStore, DomainError, FallbackConfig};

/// Thread-safe in-memory store
///
/// Useful for testing and scripted sessions. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    config: RwLock<Option<FallbackConfig>>,
    save_error: Option<String>,
    save_count: RwLock<usize>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store primed with an already persisted configuration
    pub fn with_config(config: FallbackConfig) -> Self {
        Self {
            config: RwLock::new(Some(config)),
            ..Self::default()
        }
    }

    /// Make every save fail with the given message
    pub fn with_save_error(mut self, message: impl Into<String>) -> Self {
        self.save_error = Some(message.into());
        self
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count.read().map(|count| *count).unwrap_or_default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn load(&self) -> Result<Option<FallbackConfig>, DomainError> {
        let config = self.config.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(config.clone())
    }

    async fn save(&self, config: &FallbackConfig) -> Result<(), DomainError> {
        if let Some(message) = &self.save_error {
            return Err(DomainError::storage(message.clone()));
        }

        let mut stored = self.config.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *stored = Some(config.clone());

        let mut count = self.save_count.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *count += 1;

        Ok(())
    }
}
