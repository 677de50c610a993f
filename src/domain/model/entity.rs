//! Model descriptor and tier types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse category of a model, informational only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Pro,
    Flash,
    #[serde(rename = "flash-lite")]
    Lite,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Flash => "flash",
            Self::Lite => "flash-lite",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a known upstream model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Stable upstream identifier
    id: String,
    /// Human readable label
    name: String,
    tier: ModelTier,
}

impl ModelDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: ModelTier) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
        }
    }

    // Getters

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> ModelTier {
        self.tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_creation() {
        let model = ModelDescriptor::new("gemini-2.5-pro", "Gemini 2.5 Pro", ModelTier::Pro);

        assert_eq!(model.id(), "gemini-2.5-pro");
        assert_eq!(model.name(), "Gemini 2.5 Pro");
        assert_eq!(model.tier(), ModelTier::Pro);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(ModelTier::Pro.to_string(), "pro");
        assert_eq!(ModelTier::Flash.to_string(), "flash");
        assert_eq!(ModelTier::Lite.to_string(), "flash-lite");
    }

    #[test]
    fn test_tier_serialization_matches_display() {
        let json = serde_json::to_string(&ModelTier::Lite).unwrap();
        assert_eq!(json, "\"flash-lite\"");

        let tier: ModelTier = serde_json::from_str("\"flash\"").unwrap();
        assert_eq!(tier, ModelTier::Flash);
    }
}
