use config::{Config as ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionsConfig {
    /// Maximum number of reorder suggestions shown
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Share of the usual interval after which an item is "due soon"
    #[serde(default = "default_due_soon_ratio")]
    pub due_soon_ratio: f64,
    #[serde(default = "default_top_items")]
    pub top_items: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            due_soon_ratio: default_due_soon_ratio(),
            top_items: default_top_items(),
        }
    }
}

fn default_limit() -> usize {
    cartwise_grocery::predict::SUGGESTION_LIMIT
}

fn default_due_soon_ratio() -> f64 {
    cartwise_grocery::predict::DUE_SOON_RATIO
}

fn default_top_items() -> usize {
    cartwise_grocery::stats::TOP_ITEMS
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CARTWISE__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, AppError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("database.url", "sqlite:cartwise.db")?
            .set_default("database.max_connections", 1)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file is not an error
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CARTWISE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.max_connections < 1 {
            return Err(AppError::InvalidConfig(
                "Database max_connections must be at least 1".to_string(),
            ));
        }
        if self.suggestions.limit < 1 {
            return Err(AppError::InvalidConfig(
                "Suggestions limit must be at least 1".to_string(),
            ));
        }
        if !(self.suggestions.due_soon_ratio > 0.0 && self.suggestions.due_soon_ratio <= 1.0) {
            return Err(AppError::InvalidConfig(
                "Suggestions due_soon_ratio must be within (0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}
