//! AI tier of the voice command interpreter
//!
//! Features:
//! - Tiered dispatch: free local extraction first, paid AI only when the
//!   local result is not good enough
//! - Monthly call budget shared safely across concurrent sessions
//! - AI interpreters for OpenAI-compatible chat completions and the Claude
//!   Messages API, plus a local interpreter wrapping the extractor
//! - Per-call timeout and caller-driven cancellation

pub mod factory;
pub mod prompt;
pub mod providers;
pub mod tiered;
pub mod usage;

pub use factory::{create_interpreter, create_interpreter_with};
pub use prompt::{parse_reply, system_prompt};
pub use providers::{ChatCompletionInterpreter, ClaudeInterpreter, LocalInterpreter, ProviderConfig};
pub use tiered::{Clock, DispatcherConfig, TieredDispatcher};
pub use usage::{BudgetSlot, UsagePeriod, UsageSnapshot, UsageTracker};

use thiserror::Error;

/// AI tier errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}

impl From<LlmError> for voice_command_core::Error {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout(ms) => voice_command_core::Error::Timeout(ms),
            LlmError::Configuration(msg) => voice_command_core::Error::Configuration(msg),
            other => voice_command_core::Error::Provider(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voice_command_core::Error;

    #[test]
    fn test_error_conversion() {
        assert!(matches!(Error::from(LlmError::Timeout(50)), Error::Timeout(50)));
        assert!(matches!(
            Error::from(LlmError::Configuration("no key".into())),
            Error::Configuration(_)
        ));
        let err = Error::from(LlmError::Api("HTTP 429".into()));
        assert!(err.is_provider_failure());
        assert_eq!(err.to_string(), "Provider error: API error: HTTP 429");
    }
}
