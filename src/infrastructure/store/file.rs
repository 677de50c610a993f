//! JSON file-backed configuration store

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::domain::{ConfigStore, DomainError, FallbackConfig};

/// Stores the configuration as a single JSON document.
///
/// Writes go to a sibling `.tmp` file that is renamed over the target, so a
/// failed save never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct JsonFileConfigStore {
    path: PathBuf,
}

impl JsonFileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ConfigStore for JsonFileConfigStore {
    async fn load(&self) -> Result<Option<FallbackConfig>, DomainError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No fallback configuration file");
                return Ok(None);
            }
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let config: FallbackConfig = serde_json::from_str(&content).map_err(|e| {
            DomainError::storage(format!("Malformed {}: {}", self.path.display(), e))
        })?;

        if config.chain().is_empty() {
            return Err(DomainError::storage(format!(
                "{} contains an empty chain",
                self.path.display()
            )));
        }

        Ok(Some(config))
    }

    async fn save(&self, config: &FallbackConfig) -> Result<(), DomainError> {
        if config.chain().is_empty() {
            return Err(DomainError::validation(
                "Refusing to save a configuration with an empty chain",
            ));
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| DomainError::storage(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let temp_path = self.temp_path();
        let written = async {
            fs::write(&temp_path, format!("{}\n", json)).await?;
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(DomainError::storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            )));
        }

        debug!(path = %self.path.display(), "Wrote fallback configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FallbackChain;
    use tempfile::TempDir;
    use tokio_test::assert_ok;

    fn chain(ids: &[&str]) -> FallbackChain {
        ids.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileConfigStore::new(dir.path().join("missing.json"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileConfigStore::new(dir.path().join("nested/dir/fallback.json"));
        let config = FallbackConfig::new(true, chain(&["b", "a", "b"]));

        assert_ok!(store.save(&config).await);

        assert_eq!(store.load().await.unwrap(), Some(config));
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fallback.json");
        let store = JsonFileConfigStore::new(&path);

        store
            .save(&FallbackConfig::new(false, chain(&["x"])))
            .await
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({"enabled": false, "chain": ["x"]}));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileConfigStore::new(dir.path().join("fallback.json"));

        store
            .save(&FallbackConfig::new(false, chain(&["a"])))
            .await
            .unwrap();
        store
            .save(&FallbackConfig::new(true, chain(&["c", "d"])))
            .await
            .unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert!(loaded.is_enabled());
        assert_eq!(loaded.chain(), &chain(&["c", "d"]));
    }

    #[tokio::test]
    async fn test_malformed_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fallback.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonFileConfigStore::new(&path).load().await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fallback.json");
        std::fs::write(&path, r#"{"enabled": "yes", "chain": "a"}"#).unwrap();

        let result = JsonFileConfigStore::new(&path).load().await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_persisted_empty_chain_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fallback.json");
        std::fs::write(&path, r#"{"enabled": true, "chain": []}"#).unwrap();

        let result = JsonFileConfigStore::new(&path).load().await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_save_rejects_empty_chain() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fallback.json");
        let store = JsonFileConfigStore::new(&path);

        let result = store
            .save(&FallbackConfig::new(true, FallbackChain::default()))
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let store = JsonFileConfigStore::new(blocker.join("fallback.json"));
        let result = store.save(&FallbackConfig::default()).await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
