//! Model domain - Catalog of known upstream models

mod catalog;
mod entity;

pub use catalog::ModelCatalog;
pub use entity::{ModelDescriptor, ModelTier};
