//! Configuration management for the voice command interpreter
//!
//! Supports loading configuration from:
//! - TOML/YAML files (`config/default`, `config/{env}`)
//! - Environment variables (VOICE_COMMAND_ prefix, `__` separator)
//! - Runtime overrides
//!
//! The built-in lexicon needs no configuration; an optional YAML extension
//! file can add word-forms for new languages (see `ExtractorSettings`).

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, DispatcherSettings, ExtractorSettings,
    ObservabilityConfig, ProviderKind, ProviderSettings, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for voice_command_core::Error {
    fn from(err: ConfigError) -> Self {
        voice_command_core::Error::Configuration(err.to_string())
    }
}
