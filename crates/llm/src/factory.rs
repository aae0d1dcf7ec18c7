//! Interpreter factory
//!
//! Builds the right `IntentInterpreter` for a provider entry in the settings.
//!
//! ## Example
//! ```ignore
//! let settings = ProviderSettings::new(ProviderKind::Claude, "claude-3-5-haiku-20241022");
//! let interpreter = create_interpreter(&settings)?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use voice_command_config::constants::dispatcher::DEFAULT_PROVIDER_TIMEOUT_MS;
use voice_command_config::{ProviderKind, ProviderSettings};
use voice_command_core::IntentInterpreter;
use voice_command_text_processing::Lexicon;

use crate::providers::{ChatCompletionInterpreter, ClaudeInterpreter, ProviderConfig};
use crate::LlmError;

/// Create an interpreter using the built-in vocabulary and default timeout
pub fn create_interpreter(
    settings: &ProviderSettings,
) -> Result<Arc<dyn IntentInterpreter>, LlmError> {
    create_interpreter_with(
        settings,
        &Lexicon::builtin(),
        Duration::from_millis(DEFAULT_PROVIDER_TIMEOUT_MS),
    )
}

/// Create an interpreter whose prompt lists `lexicon`
pub fn create_interpreter_with(
    settings: &ProviderSettings,
    lexicon: &Lexicon,
    timeout: Duration,
) -> Result<Arc<dyn IntentInterpreter>, LlmError> {
    let config = ProviderConfig::from_settings(settings, timeout)?;

    tracing::info!(
        provider = settings.kind.as_str(),
        model = %config.model,
        endpoint = %config.endpoint,
        enabled = config.enabled,
        "Creating AI interpreter"
    );

    let interpreter: Arc<dyn IntentInterpreter> = match settings.kind {
        ProviderKind::OpenAi => Arc::new(ChatCompletionInterpreter::new(config, lexicon)?),
        ProviderKind::Claude => Arc::new(ClaudeInterpreter::new(config, lexicon)?),
    };
    Ok(interpreter)
}
