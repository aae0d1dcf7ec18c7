//! Error types shared by all crates

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for the voice command interpreter
#[derive(Error, Debug)]
pub enum Error {
    /// An AI provider failed (network, HTTP status, rate limit)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider did not answer within the configured timeout
    #[error("Provider timed out after {0}ms")]
    Timeout(u64),

    /// Caller cancelled the interpretation
    #[error("Interpretation cancelled")]
    Cancelled,

    /// Monthly AI budget is used up
    #[error("Monthly AI budget exhausted ({used}/{budget} calls)")]
    BudgetExhausted { used: u32, budget: u32 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl Error {
    /// Whether this error means "provider unavailable" for tiering purposes
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Error::Provider(_) | Error::Timeout(_) | Error::Cancelled | Error::Serialization(_)
        )
    }
}
