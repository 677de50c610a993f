//! Fallback service - Loads, persists and resolves the fallback configuration

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    ChainEditor, ConfigStore, DomainError, FallbackChain, FallbackConfig, FallbackDecision,
    ModelCatalog, resolve,
};

/// Service wrapping a configuration store with the default-chain policy
pub struct FallbackService {
    store: Arc<dyn ConfigStore>,
    default_chain: FallbackChain,
}

impl FallbackService {
    /// Create a new FallbackService using the built-in default chain
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self {
            store,
            default_chain: FallbackChain::builtin_default(),
        }
    }

    /// Replace the default chain used for fresh and reset configurations
    pub fn with_default_chain(mut self, default_chain: FallbackChain) -> Self {
        self.default_chain = default_chain;
        self
    }

    pub fn default_chain(&self) -> &FallbackChain {
        &self.default_chain
    }

    pub fn store(&self) -> &dyn ConfigStore {
        self.store.as_ref()
    }

    /// Configuration used when nothing usable is persisted
    pub fn defaults(&self) -> FallbackConfig {
        FallbackConfig::with_default_chain(&self.default_chain)
    }

    /// Load the persisted configuration.
    ///
    /// A missing or unreadable configuration degrades to the defaults.
    pub async fn load(&self) -> FallbackConfig {
        match self.store.load().await {
            Ok(Some(config)) => config,
            Ok(None) => self.defaults(),
            Err(e) => {
                warn!(error = %e, "Failed to load fallback configuration, using defaults");
                self.defaults()
            }
        }
    }

    /// Persist the configuration; errors are returned to the caller
    pub async fn save(&self, config: &FallbackConfig) -> Result<(), DomainError> {
        self.store.save(config).await
    }

    /// Overwrite the persisted configuration with the defaults
    pub async fn reset(&self) -> Result<FallbackConfig, DomainError> {
        let config = self.defaults();
        self.store.save(&config).await?;

        info!(chain_len = config.chain().len(), "Fallback configuration reset");
        Ok(config)
    }

    /// Decide what to try after `model` failed, using the persisted configuration
    pub async fn resolve(&self, model: &str) -> FallbackDecision {
        let config = self.load().await;
        resolve(model, &config)
    }

    /// Start an editing session on the currently persisted configuration
    pub async fn editor<'a>(&self, catalog: &'a ModelCatalog) -> ChainEditor<'a> {
        ChainEditor::new(self.load().await, self.default_chain.clone(), catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockConfigStore;
    use crate::domain::editor::ScriptedPrompter;
    use crate::domain::EditorOutcome;
    use crate::infrastructure::store::InMemoryConfigStore;

    fn chain(ids: &[&str]) -> FallbackChain {
        ids.iter().copied().collect()
    }

    fn create_service(store: InMemoryConfigStore) -> FallbackService {
        FallbackService::new(Arc::new(store)).with_default_chain(chain(&["A", "B", "C"]))
    }

    #[tokio::test]
    async fn test_load_missing_returns_defaults() {
        let service = create_service(InMemoryConfigStore::new());

        let config = service.load().await;
        assert_eq!(config, FallbackConfig::new(false, chain(&["A", "B", "C"])));
    }

    #[tokio::test]
    async fn test_load_error_degrades_to_defaults() {
        let mut store = MockConfigStore::new();
        store
            .expect_load()
            .times(1)
            .returning(|| Err(DomainError::storage("corrupt")));

        let service = FallbackService::new(Arc::new(store));

        assert_eq!(service.load().await, FallbackConfig::default());
    }

    #[tokio::test]
    async fn test_load_persisted() {
        let persisted = FallbackConfig::new(true, chain(&["Z"]));
        let service = create_service(InMemoryConfigStore::with_config(persisted.clone()));

        assert_eq!(service.load().await, persisted);
    }

    #[tokio::test]
    async fn test_reset_persists_defaults() {
        let service = create_service(InMemoryConfigStore::with_config(FallbackConfig::new(
            true,
            chain(&["Z"]),
        )));

        let config = service.reset().await.unwrap();

        assert_eq!(config, FallbackConfig::new(false, chain(&["A", "B", "C"])));
        assert_eq!(service.load().await, config);
    }

    #[tokio::test]
    async fn test_reset_is_deterministic() {
        let service = create_service(InMemoryConfigStore::new());

        let first = service.reset().await.unwrap();
        let second = service.reset().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.default_chain(), &chain(&["A", "B", "C"]));
    }

    #[tokio::test]
    async fn test_save_error_propagates() {
        let service = create_service(InMemoryConfigStore::new().with_save_error("read-only"));

        let result = service.save(&FallbackConfig::default()).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_resolve_uses_persisted_config() {
        let service = create_service(InMemoryConfigStore::with_config(FallbackConfig::new(
            true,
            chain(&["A", "B"]),
        )));

        assert_eq!(service.resolve("A").await, FallbackDecision::Next("B".into()));
        assert_eq!(service.resolve("B").await, FallbackDecision::Exhausted);
        assert_eq!(service.resolve("other").await, FallbackDecision::Next("A".into()));
    }

    #[tokio::test]
    async fn test_resolve_disabled_by_default() {
        let service = create_service(InMemoryConfigStore::new());
        assert_eq!(service.resolve("A").await, FallbackDecision::Disabled);
    }

    #[tokio::test]
    async fn test_editor_session_round_trip() {
        let service = create_service(InMemoryConfigStore::new());
        let catalog = ModelCatalog::builtin();
        let mut prompter = ScriptedPrompter::new(["1", "3", "1", "2", "5"]);

        let outcome = service
            .editor(catalog)
            .await
            .run(&mut prompter, service.store())
            .await
            .unwrap();

        let expected = FallbackConfig::new(true, chain(&["B", "A", "C"]));
        assert_eq!(outcome, EditorOutcome::Saved(expected.clone()));
        assert_eq!(service.load().await, expected);
    }
}
