//! Domain layer - Core rules for fallback chains

pub mod chain;
pub mod editor;
pub mod error;
pub mod model;

pub use chain::{
    ConfigStore, DEFAULT_CHAIN, FallbackChain, FallbackConfig, FallbackDecision, has_fallback,
    next_fallback, resolve,
};
pub use editor::{ChainBuilder, ChainEditor, EditorOutcome, EditorState, MenuChoice, Prompter};
pub use error::DomainError;
pub use model::{ModelCatalog, ModelDescriptor, ModelTier};

#[cfg(test)]
pub use chain::MockConfigStore;
