//! OpenAI-compatible chat completions interpreter
//!
//! Works with OpenAI and any server exposing `/chat/completions` (vLLM,
//! Ollama, LiteLLM). Asks for a JSON object reply.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use voice_command_core::{IntentInterpreter, IntentResult, Result};
use voice_command_text_processing::{Lexicon, ScriptDetector};

use super::{check_status, ProviderConfig};
use crate::prompt::{parse_reply, system_prompt};
use crate::LlmError;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Interpreter calling an OpenAI-compatible chat endpoint
pub struct ChatCompletionInterpreter {
    config: ProviderConfig,
    client: Client,
    system_prompt: String,
    detector: ScriptDetector,
}

impl ChatCompletionInterpreter {
    pub fn new(config: ProviderConfig, lexicon: &Lexicon) -> std::result::Result<Self, LlmError> {
        let client = config.http_client()?;
        Ok(Self {
            system_prompt: system_prompt(lexicon),
            config,
            client,
            detector: ScriptDetector::new(),
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.endpoint)
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", self.config.api_key);
        if let Ok(val) = HeaderValue::from_str(&auth_value) {
            headers.insert(AUTHORIZATION, val);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn build_request<'a>(&'a self, text: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            response_format: ResponseFormat { kind: "json_object" },
        }
    }

    async fn complete(&self, text: &str) -> std::result::Result<String, LlmError> {
        let response = self
            .client
            .post(self.chat_url())
            .headers(self.build_headers())
            .json(&self.build_request(text))
            .send()
            .await?;
        let response = check_status(response).await?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))
    }
}

#[async_trait]
impl IntentInterpreter for ChatCompletionInterpreter {
    async fn process_command(&self, text: &str) -> Result<IntentResult> {
        let reply = self.complete(text).await?;
        tracing::debug!(
            model = %self.config.model,
            reply_len = reply.len(),
            "Chat completion reply"
        );
        Ok(parse_reply(&reply, text, self.detector.detect_language(text)))
    }

    fn is_available(&self) -> bool {
        self.config.enabled && !self.config.api_key.is_empty()
    }

    fn cost_per_call(&self) -> f64 {
        self.config.cost_per_call
    }

    fn name(&self) -> &str {
        "openai"
    }
}
