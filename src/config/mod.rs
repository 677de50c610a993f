//! Application configuration

mod app_config;

pub use app_config::{AppConfig, FallbackSettings, LogFormat, LoggingConfig, StoreConfig};
