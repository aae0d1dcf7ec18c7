//! Intent result contract
//!
//! The record produced once per transcript and handed straight to the
//! caller's router. Serializes to a plain JSON object:
//!
//! ```json
//! {
//!   "intent": "SEARCH_COMMAND",
//!   "confidence": 0.8,
//!   "payload": {"action": "search", "target": null, "query": "mumbai cotton", "filters": ["mumbai"]},
//!   "originalText": "search Mumbai cotton",
//!   "language": "en"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::context::BusinessContext;
use crate::language::Language;

/// Intent name used when no action was recognised
pub const UNKNOWN_INTENT: &str = "UNKNOWN_INTENT";

/// Suffix appended to an action name to form its intent name
const COMMAND_SUFFIX: &str = "_COMMAND";

/// Extracted command parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    /// Ordered, duplicate-free
    #[serde(default)]
    pub filters: Vec<String>,
}

impl IntentPayload {
    /// Append a filter unless it is already present
    pub fn push_filter(&mut self, filter: impl Into<String>) -> bool {
        let filter = filter.into();
        if self.filters.contains(&filter) {
            return false;
        }
        self.filters.push(filter);
        true
    }

    /// Drop duplicate filters, keeping the first occurrence
    pub fn dedup_filters(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.filters.len());
        for filter in self.filters.drain(..) {
            if !seen.contains(&filter) {
                seen.push(filter);
            }
        }
        self.filters = seen;
    }
}

/// Structured interpretation of one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResult {
    /// `{ACTION}_COMMAND` or `UNKNOWN_INTENT`
    pub intent: String,
    /// In [0.0, 1.0]
    pub confidence: f32,
    pub payload: IntentPayload,
    /// The untouched input transcript
    pub original_text: String,
    pub language: Language,
}

impl IntentResult {
    /// Result for a transcript nothing could be made of
    pub fn unknown(original_text: impl Into<String>, language: Language) -> Self {
        Self {
            intent: UNKNOWN_INTENT.to_string(),
            confidence: 0.0,
            payload: IntentPayload::default(),
            original_text: original_text.into(),
            language,
        }
    }

    /// Intent name for an action (`search` -> `SEARCH_COMMAND`)
    pub fn command_intent(action: &str) -> String {
        let action = action.trim().to_uppercase();
        if action.ends_with(COMMAND_SUFFIX) {
            action
        } else {
            format!("{}{}", action, COMMAND_SUFFIX)
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }

    /// Action name recovered from the intent (`SEARCH_COMMAND` -> `search`)
    pub fn action_name(&self) -> Option<String> {
        self.intent
            .strip_suffix(COMMAND_SUFFIX)
            .map(|a| a.to_lowercase())
    }

    /// Serialize to a JSON value for the router/UI layer
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Which tier produced the final result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMethod {
    /// Free rule-based extractor
    Local,
    /// Paid external interpreter
    Ai,
    /// AI tier unavailable or unhelpful; local result returned as-is
    Fallback,
}

impl ProcessingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Ai => "ai",
            Self::Fallback => "fallback",
        }
    }
}

/// Result of a tiered interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TieredResult {
    pub result: IntentResult,
    pub method: ProcessingMethod,
    /// USD charged for this interpretation
    pub cost_usd: f64,
    /// Name of the AI provider that answered, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Business context handed back unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<BusinessContext>,
}
