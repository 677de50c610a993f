//! Gemini Fallback
//!
//! Chooses the next model to try when an upstream Gemini model is unavailable:
//! - Ordered fallback chains with waterfall resolution
//! - A static catalog of known models for display
//! - An interactive editor that validates and persists the chain
//! - A JSON file store for the persisted configuration

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{FallbackChain, FallbackConfig, FallbackDecision, has_fallback, next_fallback};
