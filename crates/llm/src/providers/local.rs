//! Zero-cost interpreter backed by the rule-based extractor

use async_trait::async_trait;
use std::sync::Arc;
use voice_command_core::{IntentInterpreter, IntentResult, Result};
use voice_command_text_processing::CommandExtractor;

/// Wraps a [`CommandExtractor`] behind the interpreter trait
#[derive(Debug, Clone)]
pub struct LocalInterpreter {
    extractor: Arc<CommandExtractor>,
}

impl LocalInterpreter {
    pub fn new(extractor: Arc<CommandExtractor>) -> Self {
        Self { extractor }
    }
}

impl Default for LocalInterpreter {
    fn default() -> Self {
        Self::new(Arc::new(CommandExtractor::default()))
    }
}

#[async_trait]
impl IntentInterpreter for LocalInterpreter {
    async fn process_command(&self, text: &str) -> Result<IntentResult> {
        Ok(self.extractor.process(text))
    }

    fn is_available(&self) -> bool {
        true
    }

    fn cost_per_call(&self) -> f64 {
        0.0
    }

    fn name(&self) -> &str {
        "local"
    }
}
