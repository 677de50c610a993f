//! Fallback resolution - picks the next model to try

use super::{FallbackChain, FallbackConfig};

/// Next model to try after `current` fails.
///
/// A model outside the chain restarts from the top; the last entry has no
/// successor. Stateless, so repeated calls give the same answer.
pub fn next_fallback<'a>(current: &str, chain: &'a FallbackChain) -> Option<&'a str> {
    match chain.position(current) {
        Some(index) => chain.get(index + 1),
        None => chain.first(),
    }
}

pub fn has_fallback(current: &str, chain: &FallbackChain) -> bool {
    next_fallback(current, chain).is_some()
}

/// Request-time decision for a failed model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackDecision {
    /// Fallback is switched off; surface the upstream failure
    Disabled,
    /// Retry with this model
    Next(String),
    /// Every model in the chain has been tried
    Exhausted,
}

impl FallbackDecision {
    /// Decision for an enabled configuration, given the chain successor
    pub fn from_next(next: Option<&str>) -> Self {
        match next {
            Some(model) => Self::Next(model.to_string()),
            None => Self::Exhausted,
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            Self::Next(model) => Some(model.as_str()),
            _ => None,
        }
    }
}

pub fn resolve(current: &str, config: &FallbackConfig) -> FallbackDecision {
    if !config.is_enabled() {
        return FallbackDecision::Disabled;
    }

    FallbackDecision::from_next(next_fallback(current, config.chain()))
}
