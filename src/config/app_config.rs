use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{DomainError, FallbackChain};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub fallback: FallbackSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Location of the persisted fallback configuration
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FallbackSettings {
    /// Overrides the built-in default chain
    #[serde(default)]
    pub default_chain: Option<Vec<String>>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("fallback_config.json"),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Default chain for fresh and reset configurations
    pub fn default_chain(&self) -> Result<FallbackChain, DomainError> {
        match &self.fallback.default_chain {
            None => Ok(FallbackChain::builtin_default()),
            Some(models) if models.is_empty() => Err(DomainError::configuration(
                "fallback.default_chain must list at least one model",
            )),
            Some(models) => Ok(FallbackChain::new(models.clone())),
        }
    }
}
