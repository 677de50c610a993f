//! Static registry of known models

use once_cell::sync::Lazy;

use super::{ModelDescriptor, ModelTier};

static BUILTIN_CATALOG: Lazy<ModelCatalog> = Lazy::new(|| {
    ModelCatalog::new(vec![
        ModelDescriptor::new("gemini-2.5-pro", "Gemini 2.5 Pro", ModelTier::Pro),
        ModelDescriptor::new("gemini-2.5-flash", "Gemini 2.5 Flash", ModelTier::Flash),
        ModelDescriptor::new(
            "gemini-2.5-flash-lite",
            "Gemini 2.5 Flash Lite",
            ModelTier::Lite,
        ),
        ModelDescriptor::new("gemini-2.0-flash", "Gemini 2.0 Flash", ModelTier::Flash),
        ModelDescriptor::new(
            "gemini-2.0-flash-lite",
            "Gemini 2.0 Flash Lite",
            ModelTier::Lite,
        ),
    ])
});

/// Read-only lookup table from model id to descriptor.
///
/// Lookups are total: an id the catalog does not know resolves to `None`
/// and displays as itself, so models added upstream keep working.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    models: Vec<ModelDescriptor>,
}

impl ModelCatalog {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self { models }
    }

    /// The process-wide catalog of supported models
    pub fn builtin() -> &'static ModelCatalog {
        &BUILTIN_CATALOG
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn get(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id() == id)
    }

    /// Display label for an id, or the id itself when uncataloged
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|m| m.name()).unwrap_or(id)
    }

    /// Catalog entries not present in `excluding`, in catalog order
    pub fn available(&self, excluding: &[String]) -> Vec<&ModelDescriptor> {
        self.models
            .iter()
            .filter(|m| !excluding.iter().any(|id| id == m.id()))
            .collect()
    }
}
