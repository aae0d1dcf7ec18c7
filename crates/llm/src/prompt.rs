//! Prompt construction and reply parsing for AI interpreters

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use voice_command_config::constants::confidence::MALFORMED_AI_RESPONSE;
use voice_command_core::{IntentPayload, IntentResult, Language, UNKNOWN_INTENT};
use voice_command_text_processing::{ActionKind, Concept, Lexicon, TargetKind};

/// Languages whose first form is shown as a hint next to each concept
const HINT_LANGUAGES: &[&str] = &["hi-Latn", "hi", "gu"];

/// JSON object inside a ```json fenced block
static FENCED_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid fenced-json regex")
});

/// System prompt describing the command vocabulary and reply format
pub fn system_prompt(lexicon: &Lexicon) -> String {
    let actions = ActionKind::ALL
        .iter()
        .map(|kind| describe(lexicon, Concept::Action(*kind), &kind.payload_value()))
        .collect::<Vec<_>>()
        .join("\n");
    let targets = TargetKind::ALL
        .iter()
        .map(|kind| describe(lexicon, Concept::Target(*kind), &kind.payload_value()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You interpret voice commands for a small-business app. Commands may be in English, \
Hindi or Gujarati, in native script or romanized, and often mix languages.\n\n\
Actions:\n{actions}\n\nTargets:\n{targets}\n\n\
Filters are priority words (hot, urgent), status words (pending, paid) and Indian city or \
state names.\n\n\
Reply with exactly one JSON object and nothing else:\n\
{{\"intent\": \"<ACTION>_COMMAND or UNKNOWN_INTENT\", \"confidence\": <0.0-1.0>, \
\"payload\": {{\"action\": \"<action or null>\", \"target\": \"<target or null>\", \
\"query\": \"<remaining search text or null>\", \"filters\": [\"...\"]}}}}"
    )
}

fn describe(lexicon: &Lexicon, concept: Concept, name: &str) -> String {
    let hints: Vec<&str> = HINT_LANGUAGES
        .iter()
        .filter_map(|lang| lexicon.forms_in(concept, lang).first())
        .map(String::as_str)
        .collect();
    if hints.is_empty() {
        format!("- {}", name)
    } else {
        format!("- {} ({})", name, hints.join(", "))
    }
}

#[derive(Debug, Deserialize)]
struct Reply {
    intent: String,
    #[serde(default)]
    confidence: Option<f32>,
    #[serde(default)]
    payload: ReplyPayload,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ReplyPayload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    filters: Vec<String>,
}

/// First JSON object in a reply: fenced block first, then bare braces
fn extract_json(reply: &str) -> Option<&str> {
    if let Some(captures) = FENCED_JSON.captures(reply) {
        return captures.get(1).map(|m| m.as_str());
    }
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (start < end).then(|| &reply[start..=end])
}

fn known_action(name: &str) -> Option<ActionKind> {
    let name = name.trim().to_lowercase();
    ActionKind::ALL.into_iter().find(|k| k.payload_value() == name)
}

fn known_target(name: &str) -> Option<TargetKind> {
    let name = name.trim().to_lowercase();
    TargetKind::ALL.into_iter().find(|k| k.payload_value() == name)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "null")
}

/// Turn a provider reply into an intent
///
/// Intents outside the known action set become `UNKNOWN_INTENT`. A reply
/// with no parsable JSON object yields a neutral result: unknown intent,
/// confidence 0.5, the whole transcript as query.
pub fn parse_reply(reply: &str, transcript: &str, language: Language) -> IntentResult {
    let parsed = extract_json(reply)
        .ok_or_else(|| "no JSON object in reply".to_string())
        .and_then(|json| serde_json::from_str::<Reply>(json).map_err(|e| e.to_string()));

    let reply = match parsed {
        Ok(reply) => reply,
        Err(reason) => {
            tracing::warn!(reason = %reason, "Malformed AI reply; using neutral result");
            return neutral_result(transcript, language);
        }
    };

    let action = reply
        .intent
        .trim()
        .to_uppercase()
        .strip_suffix("_COMMAND")
        .and_then(known_action)
        .or_else(|| reply.payload.action.as_deref().and_then(known_action));

    let intent = match action {
        Some(kind) => kind.intent_name(),
        None => UNKNOWN_INTENT.to_string(),
    };

    let mut payload = IntentPayload {
        action: action.map(|k| k.payload_value()),
        target: reply
            .payload
            .target
            .as_deref()
            .and_then(known_target)
            .map(|k| k.payload_value()),
        query: non_blank(reply.payload.query),
        filters: reply
            .payload
            .filters
            .into_iter()
            .map(|f| f.trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect(),
    };
    payload.dedup_filters();

    let confidence = reply
        .confidence
        .filter(|c| c.is_finite())
        .unwrap_or(MALFORMED_AI_RESPONSE)
        .clamp(0.0, 1.0);

    IntentResult {
        intent,
        confidence,
        payload,
        original_text: transcript.to_string(),
        language: reply
            .language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(language),
    }
}

fn neutral_result(transcript: &str, language: Language) -> IntentResult {
    let mut result = IntentResult::unknown(transcript, language);
    result.confidence = MALFORMED_AI_RESPONSE;
    result.payload.query = non_blank(Some(transcript.to_string()));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_lists_vocabulary() {
        let prompt = system_prompt(&Lexicon::builtin());
        for word in ["search", "dashboard", "dhundo", "खोजो", "શોધો", "UNKNOWN_INTENT"] {
            assert!(prompt.contains(word), "prompt is missing {}", word);
        }
        assert!(!prompt.contains("music"));
    }

    #[test]
    fn test_parse_bare_json() {
        let reply = r#"{"intent": "search_command", "confidence": 0.9,
            "payload": {"action": "search", "target": null, "query": "cotton", "filters": ["Surat", "surat"]}}"#;
        let result = parse_reply(reply, "surat mein cotton dhoondho", Language::English);
        assert_eq!(result.intent, "SEARCH_COMMAND");
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.payload.action.as_deref(), Some("search"));
        assert_eq!(result.payload.target, None);
        assert_eq!(result.payload.query.as_deref(), Some("cotton"));
        assert_eq!(result.payload.filters, vec!["surat"]);
        assert_eq!(result.original_text, "surat mein cotton dhoondho");
    }

    #[test]
    fn test_parse_fenced_json_with_prose() {
        let reply = "Sure! Here you go:\n```json\n{\"intent\": \"SHOW_COMMAND\", \"confidence\": 1.7, \
                     \"payload\": {\"target\": \"Leads\"}, \"language\": \"hi\"}\n```\nAnything else?";
        let result = parse_reply(reply, "लीड दिखाओ", Language::Hindi);
        assert_eq!(result.intent, "SHOW_COMMAND");
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.payload.action.as_deref(), Some("show"));
        assert_eq!(result.payload.target.as_deref(), Some("leads"));
        assert_eq!(result.language, Language::Hindi);
    }

    #[test]
    fn test_unknown_action_is_unknown_intent() {
        let reply = r#"{"intent": "PLAY_COMMAND", "confidence": 0.9, "payload": {"target": "music"}}"#;
        let result = parse_reply(reply, "play music", Language::English);
        assert!(result.is_unknown());
        assert_eq!(result.payload.action, None);
        assert_eq!(result.payload.target, None);
    }

    #[test]
    fn test_action_recovered_from_payload() {
        let reply = r#"{"intent": "", "payload": {"action": "CALL"}}"#;
        let result = parse_reply(reply, "ramesh ko phone lagao", Language::English);
        assert_eq!(result.intent, "CALL_COMMAND");
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_malformed_reply_is_neutral() {
        for reply in ["I could not understand", "{not json}", "", "}{"] {
            let result = parse_reply(reply, "kuch bhi", Language::English);
            assert!(result.is_unknown(), "{:?}", reply);
            assert_eq!(result.confidence, 0.5);
            assert_eq!(result.payload.query.as_deref(), Some("kuch bhi"));
            assert_eq!(result.original_text, "kuch bhi");
        }
    }

    #[test]
    fn test_extract_json() {
        assert_eq!(extract_json("x {\"a\": 1} y"), Some("{\"a\": 1}"));
        assert_eq!(extract_json("```\n{\"a\": 1}\n```"), Some("{\"a\": 1}"));
        assert_eq!(extract_json("no braces"), None);
    }
}
