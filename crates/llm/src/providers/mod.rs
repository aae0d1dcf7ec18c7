//! Intent interpreters behind the `IntentInterpreter` trait

mod claude;
mod local;
mod openai;

pub use claude::ClaudeInterpreter;
pub use local::LocalInterpreter;
pub use openai::ChatCompletionInterpreter;

use std::time::Duration;
use voice_command_config::ProviderSettings;

use crate::LlmError;

/// Resolved settings for one remote provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL without trailing slash
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    /// HTTP client timeout
    pub timeout: Duration,
    /// USD charged per call
    pub cost_per_call: f64,
    /// Disabled providers report themselves unavailable
    pub enabled: bool,
}

impl ProviderConfig {
    /// Resolve settings, reading the API key from the configured variable
    pub fn from_settings(settings: &ProviderSettings, timeout: Duration) -> Result<Self, LlmError> {
        let api_key = settings.api_key().ok_or_else(|| {
            LlmError::Configuration(format!(
                "{} not set for {} provider",
                settings.api_key_env(),
                settings.kind.as_str()
            ))
        })?;
        Ok(Self::with_api_key(settings, api_key, timeout))
    }

    /// Resolve settings with an explicit API key
    pub fn with_api_key(
        settings: &ProviderSettings,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoint: settings.endpoint().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout,
            cost_per_call: settings.cost_per_call(),
            enabled: settings.enabled,
        }
    }

    fn http_client(&self) -> Result<reqwest::Client, LlmError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))
    }
}

/// Fail with the body text unless the response is 2xx
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response.text().await.unwrap_or_default();
    Err(LlmError::Api(format!("HTTP {}: {}", status, error_text)))
}
