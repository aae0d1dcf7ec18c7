//! Interpreter trait shared by every tier

use async_trait::async_trait;

use crate::error::Result;
use crate::intent::IntentResult;

/// Turns a transcript into an intent
///
/// Implemented by the free local extractor and by paid AI providers. AI
/// implementations may fail; the tiered dispatcher treats any error as
/// "provider unavailable" and never surfaces it to the caller.
#[async_trait]
pub trait IntentInterpreter: Send + Sync {
    /// Interpret a transcript
    async fn process_command(&self, text: &str) -> Result<IntentResult>;

    /// Whether the provider can currently take requests (key present, not disabled)
    fn is_available(&self) -> bool;

    /// USD charged per call
    fn cost_per_call(&self) -> f64;

    /// Provider name for logging and result tagging
    fn name(&self) -> &str;
}
