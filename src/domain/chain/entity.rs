//! Fallback chain and configuration entities

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// System-wide default priority order, highest priority first
pub const DEFAULT_CHAIN: [&str; 4] = [
    "gemini-2.5-pro",
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-2.5-flash-lite",
];

/// Ordered list of model ids; index 0 is tried first.
///
/// Ids are not checked against the catalog and duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackChain(Vec<String>);

impl FallbackChain {
    pub fn new(models: Vec<String>) -> Self {
        Self(models)
    }

    /// A fresh copy of the built-in default chain
    pub fn builtin_default() -> Self {
        DEFAULT_CHAIN.iter().copied().collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Index of the first occurrence of `model`
    pub fn position(&self, model: &str) -> Option<usize> {
        self.0.iter().position(|m| m == model)
    }

    pub fn push(&mut self, model: impl Into<String>) {
        self.0.push(model.into());
    }

    /// Move the entry at 1-based `from` so it ends up at 1-based `to`.
    ///
    /// Other entries shift to make room. On error the chain is untouched.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::validation("Chain is empty, nothing to reorder"));
        }

        let len = self.0.len();
        for position in [from, to] {
            if position == 0 || position > len {
                return Err(DomainError::validation(format!(
                    "Position {} is out of range (1-{})",
                    position, len
                )));
            }
        }

        let model = self.0.remove(from - 1);
        self.0.insert(to - 1, model);
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for FallbackChain {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Persisted fallback settings: `{"enabled": bool, "chain": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    enabled: bool,
    chain: FallbackChain,
}

impl FallbackConfig {
    pub fn new(enabled: bool, chain: FallbackChain) -> Self {
        Self { enabled, chain }
    }

    /// Disabled configuration seeded with a copy of `default_chain`
    pub fn with_default_chain(default_chain: &FallbackChain) -> Self {
        Self::new(false, default_chain.clone())
    }

    // Getters

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    // Mutators

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn replace_chain(&mut self, chain: FallbackChain) {
        self.chain = chain;
    }

    /// Replace the chain with a copy of `default_chain`, keeping `enabled`
    pub fn reset_chain(&mut self, default_chain: &FallbackChain) {
        self.chain = default_chain.clone();
    }

    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        self.chain.move_entry(from, to)
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self::with_default_chain(&FallbackChain::builtin_default())
    }
}
