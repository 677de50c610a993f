//! Infrastructure layer - Store, console and logging implementations

pub mod console;
pub mod logging;
pub mod services;
pub mod store;
