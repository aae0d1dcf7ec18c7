//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{costs, dispatcher, endpoints, fuzzy};
use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Local command extractor
    #[serde(default)]
    pub extractor: ExtractorSettings,

    /// Tiered dispatcher and AI providers
    #[serde(default)]
    pub dispatcher: DispatcherSettings,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Local extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorSettings {
    /// Minimum similarity for a fuzzy action match
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f32,

    /// Tokens must be longer than this to be fuzzy matched
    #[serde(default = "default_fuzzy_min_length")]
    pub fuzzy_min_length: usize,

    /// Optional YAML file with extra word-forms (CONCEPT -> lang -> [words])
    #[serde(default)]
    pub lexicon_extension_path: Option<String>,
}

fn default_fuzzy_threshold() -> f32 {
    fuzzy::ACTION_THRESHOLD
}

fn default_fuzzy_min_length() -> usize {
    fuzzy::MIN_TOKEN_LENGTH
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            fuzzy_min_length: default_fuzzy_min_length(),
            lexicon_extension_path: None,
        }
    }
}

/// Tiered dispatcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherSettings {
    /// AI calls allowed per calendar month
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: u32,

    /// Escalate to AI when local confidence is below this
    #[serde(default = "default_escalation_threshold")]
    pub escalation_threshold: f32,

    /// Timeout for a single provider call
    #[serde(default = "default_provider_timeout_ms")]
    pub provider_timeout_ms: u64,

    /// Primary AI provider (None = local only)
    #[serde(default)]
    pub primary: Option<ProviderSettings>,

    /// Provider tried once when the primary fails
    #[serde(default)]
    pub fallback: Option<ProviderSettings>,

    /// Keep empty and filler-only transcripts away from paid providers
    ///
    /// Off by default: an unknown transcript within budget always reaches
    /// the primary provider.
    #[serde(default)]
    pub skip_noise_only: bool,
}

fn default_monthly_budget() -> u32 {
    dispatcher::DEFAULT_MONTHLY_BUDGET
}

fn default_escalation_threshold() -> f32 {
    dispatcher::DEFAULT_ESCALATION_THRESHOLD
}

fn default_provider_timeout_ms() -> u64 {
    dispatcher::DEFAULT_PROVIDER_TIMEOUT_MS
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self {
            monthly_budget: default_monthly_budget(),
            escalation_threshold: default_escalation_threshold(),
            provider_timeout_ms: default_provider_timeout_ms(),
            primary: None,
            fallback: None,
            skip_noise_only: false,
        }
    }
}

/// Supported AI provider APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI-compatible chat completions (OpenAI, Azure, vLLM, Ollama)
    #[default]
    #[serde(alias = "openai-compatible")]
    OpenAi,
    /// Anthropic messages API
    #[serde(alias = "anthropic")]
    Claude,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Claude => "claude",
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Self::OpenAi => endpoints::OPENAI_DEFAULT,
            Self::Claude => endpoints::CLAUDE_DEFAULT,
        }
    }

    pub fn default_cost(&self) -> f64 {
        match self {
            Self::OpenAi => costs::OPENAI_PER_CALL,
            Self::Claude => costs::CLAUDE_PER_CALL,
        }
    }

    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Claude => "ANTHROPIC_API_KEY",
        }
    }
}

/// A single AI provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub kind: ProviderKind,

    /// Model name/ID
    pub model: String,

    /// API endpoint (defaults per kind)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Name of the environment variable holding the API key
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// USD per call (defaults per kind)
    #[serde(default)]
    pub cost_per_call_usd: Option<f64>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Disabled providers report unavailable and are skipped
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_max_tokens() -> usize {
    256
}

fn default_temperature() -> f32 {
    0.0
}

fn default_true() -> bool {
    true
}

impl ProviderSettings {
    pub fn new(kind: ProviderKind, model: impl Into<String>) -> Self {
        Self {
            kind,
            model: model.into(),
            endpoint: None,
            api_key_env: None,
            cost_per_call_usd: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            enabled: true,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.kind.default_endpoint())
    }

    pub fn cost_per_call(&self) -> f64 {
        self.cost_per_call_usd
            .unwrap_or_else(|| self.kind.default_cost())
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.kind.default_api_key_env())
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(self.api_key_env())
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.extractor.fuzzy_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "extractor.fuzzy_threshold".to_string(),
                message: format!("must be in (0, 1], got {}", threshold),
            });
        }

        let escalation = self.dispatcher.escalation_threshold;
        if !(escalation > 0.0 && escalation <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "dispatcher.escalation_threshold".to_string(),
                message: format!("must be in (0, 1], got {}", escalation),
            });
        }

        if self.dispatcher.provider_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dispatcher.provider_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        for (name, provider) in [
            ("dispatcher.primary", &self.dispatcher.primary),
            ("dispatcher.fallback", &self.dispatcher.fallback),
        ] {
            if let Some(provider) = provider {
                Self::validate_provider(name, provider)?;
            }
        }

        Ok(())
    }

    fn validate_provider(field: &str, provider: &ProviderSettings) -> Result<(), ConfigError> {
        if provider.model.trim().is_empty() {
            return Err(ConfigError::MissingField(format!("{}.model", field)));
        }

        if provider.cost_per_call() < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: format!("{}.cost_per_call_usd", field),
                message: "must not be negative".to_string(),
            });
        }

        Ok(())
    }
}

/// Load settings from `config/default`, `config/{env}` and the environment
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("VOICE_COMMAND")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        env = env.unwrap_or("default"),
        primary = settings.dispatcher.primary.is_some(),
        "Loaded settings"
    );

    Ok(settings)
}

/// Load settings from a single file (format from its extension)
pub fn load_settings_from<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config = Config::builder()
        .add_source(File::from(path))
        .build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;
    Ok(settings)
}
