//! Anthropic Messages API interpreter

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use voice_command_core::{IntentInterpreter, IntentResult, Result};
use voice_command_text_processing::{Lexicon, ScriptDetector};

use super::{check_status, ProviderConfig};
use crate::prompt::{parse_reply, system_prompt};
use crate::LlmError;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Interpreter backed by Claude
pub struct ClaudeInterpreter {
    config: ProviderConfig,
    client: Client,
    system_prompt: String,
    detector: ScriptDetector,
}

impl ClaudeInterpreter {
    pub fn new(config: ProviderConfig, lexicon: &Lexicon) -> std::result::Result<Self, LlmError> {
        let client = config.http_client()?;
        Ok(Self {
            system_prompt: system_prompt(lexicon),
            config,
            client,
            detector: ScriptDetector::new(),
        })
    }

    fn build_request<'a>(&'a self, text: &'a str) -> ClaudeRequest<'a> {
        ClaudeRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: &self.system_prompt,
            messages: vec![ClaudeMessage {
                role: "user",
                content: text,
            }],
            temperature: Some(self.config.temperature),
        }
    }

    async fn complete(&self, text: &str) -> std::result::Result<String, LlmError> {
        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.endpoint))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&self.build_request(text))
            .send()
            .await?;
        let response = check_status(response).await?;

        let response: ClaudeApiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Ok(response.text())
    }
}

#[async_trait]
impl IntentInterpreter for ClaudeInterpreter {
    async fn process_command(&self, text: &str) -> Result<IntentResult> {
        let reply = self.complete(text).await?;
        tracing::debug!(model = %self.config.model, reply_len = reply.len(), "Claude reply");
        Ok(parse_reply(&reply, text, self.detector.detect_language(text)))
    }

    fn is_available(&self) -> bool {
        self.config.enabled && !self.config.api_key.is_empty()
    }

    fn cost_per_call(&self) -> f64 {
        self.config.cost_per_call
    }

    fn name(&self) -> &str {
        "claude"
    }
}

// =============================================================================
// Claude API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct ClaudeRequest<'a> {
    model: &'a str,
    max_tokens: usize,
    system: &'a str,
    messages: Vec<ClaudeMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ClaudeMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClaudeContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ClaudeApiResponse {
    content: Vec<ClaudeContentBlock>,
}

impl ClaudeApiResponse {
    /// Concatenated text blocks
    fn text(self) -> String {
        self.content
            .into_iter()
            .filter_map(|block| match block {
                ClaudeContentBlock::Text { text } => Some(text),
                ClaudeContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}
