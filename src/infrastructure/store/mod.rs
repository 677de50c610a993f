//! Configuration store implementations

mod file;
mod in_memory;

pub use file::JsonFileConfigStore;
pub use in_memory::InMemoryConfigStore;
