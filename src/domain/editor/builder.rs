//! Build session - assembles a new chain from the catalog

use std::mem;

use crate::domain::model::{ModelCatalog, ModelDescriptor};
use crate::domain::{DomainError, FallbackChain};

/// Working state of a chain build.
///
/// Picked models leave the pool, so the pool shrinks with every selection.
#[derive(Debug)]
pub struct ChainBuilder<'a> {
    catalog: &'a ModelCatalog,
    chain: FallbackChain,
}

impl<'a> ChainBuilder<'a> {
    pub fn new(catalog: &'a ModelCatalog) -> Self {
        Self {
            catalog,
            chain: FallbackChain::default(),
        }
    }

    /// Models still available for selection
    pub fn available(&self) -> Vec<&'a ModelDescriptor> {
        self.catalog.available(self.chain.as_slice())
    }

    pub fn is_exhausted(&self) -> bool {
        self.available().is_empty()
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    /// Append the model at 1-based `choice` of the current pool
    pub fn select(&mut self, choice: usize) -> Result<&'a ModelDescriptor, DomainError> {
        let available = self.available();

        let model = choice
            .checked_sub(1)
            .and_then(|index| available.get(index).copied())
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Selection {} is out of range (1-{})",
                    choice,
                    available.len()
                ))
            })?;

        self.chain.push(model.id());
        Ok(model)
    }

    /// Take the built chain; refused while nothing has been selected
    pub fn finish(&mut self) -> Result<FallbackChain, DomainError> {
        if self.chain.is_empty() {
            return Err(DomainError::validation(
                "Select at least one model before finishing",
            ));
        }

        Ok(mem::take(&mut self.chain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ModelTier;

    fn catalog() -> ModelCatalog {
        ModelCatalog::new(vec![
            ModelDescriptor::new("a", "Model A", ModelTier::Pro),
            ModelDescriptor::new("b", "Model B", ModelTier::Flash),
            ModelDescriptor::new("c", "Model C", ModelTier::Lite),
        ])
    }

    #[test]
    fn test_select_removes_from_pool() {
        let catalog = catalog();
        let mut builder = ChainBuilder::new(&catalog);

        let picked = builder.select(2).unwrap();
        assert_eq!(picked.id(), "b");

        let ids: Vec<&str> = builder.available().iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        // Index 2 now refers to "c"
        assert_eq!(builder.select(2).unwrap().id(), "c");
        assert_eq!(builder.chain().as_slice(), ["b", "c"]);
    }

    #[test]
    fn test_select_out_of_range() {
        let catalog = catalog();
        let mut builder = ChainBuilder::new(&catalog);

        assert!(builder.select(0).is_err());
        assert!(builder.select(4).is_err());
        assert!(builder.chain().is_empty());
    }

    #[test]
    fn test_finish_rejects_empty() {
        let catalog = catalog();
        let mut builder = ChainBuilder::new(&catalog);

        let err = builder.finish().unwrap_err();
        assert!(err.is_recoverable());

        builder.select(1).unwrap();
        let chain = builder.finish().unwrap();
        assert_eq!(chain.as_slice(), ["a"]);
    }

    #[test]
    fn test_pool_exhaustion() {
        let catalog = catalog();
        let mut builder = ChainBuilder::new(&catalog);

        for _ in 0..3 {
            assert!(!builder.is_exhausted());
            builder.select(1).unwrap();
        }

        assert!(builder.is_exhausted());
        assert_eq!(builder.finish().unwrap().as_slice(), ["a", "b", "c"]);
    }
}
