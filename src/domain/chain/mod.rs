//! Fallback chain domain - Chain configuration and resolution

mod entity;
mod repository;
mod resolver;

pub use entity::{DEFAULT_CHAIN, FallbackChain, FallbackConfig};
pub use repository::ConfigStore;
pub use resolver::{FallbackDecision, has_fallback, next_fallback, resolve};

#[cfg(test)]
pub use repository::MockConfigStore;
