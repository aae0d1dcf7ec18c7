//! Language and script definitions
//!
//! Transcripts arrive in English, Hindi, Gujarati, or a code-mixed blend of
//! them. Romanized Hindi/Gujarati ("dhundo", "batavo") is Latin script and is
//! reported as English; the lexicon carries those spellings separately.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dominant language of a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "gu")]
    Gujarati,
    /// More than one script family present
    #[serde(rename = "mixed")]
    Mixed,
}

impl Language {
    /// Short code used in the intent result
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Gujarati => "gu",
            Self::Mixed => "mixed",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Gujarati => "Gujarati",
            Self::Mixed => "Mixed",
        }
    }

    /// Parse from code or name
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "hi" | "hindi" => Some(Self::Hindi),
            "gu" | "gujarati" => Some(Self::Gujarati),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// Language implied by a single script family
    pub fn for_script(script: Script) -> Self {
        match script {
            Script::Latin => Self::English,
            Script::Devanagari => Self::Hindi,
            Script::Gujarati => Self::Gujarati,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Script families recognised in transcripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Devanagari,
    Gujarati,
}

impl Script {
    /// Unicode block range for the script, `None` for Latin (ASCII letters)
    pub fn unicode_range(&self) -> Option<(char, char)> {
        match self {
            Self::Latin => None,
            Self::Devanagari => Some(('\u{0900}', '\u{097F}')),
            Self::Gujarati => Some(('\u{0A80}', '\u{0AFF}')),
        }
    }

    /// Classify a single character
    ///
    /// Only letters count for Latin; digits, punctuation and marks outside the
    /// Indic blocks return `None`.
    pub fn of_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Latin)
        } else if ('\u{0900}'..='\u{097F}').contains(&c) {
            Some(Self::Devanagari)
        } else if ('\u{0A80}'..='\u{0AFF}').contains(&c) {
            Some(Self::Gujarati)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Gujarati.code(), "gu");
        assert_eq!(Language::Mixed.code(), "mixed");
    }

    #[test]
    fn test_language_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Mixed).unwrap();
        assert_eq!(json, "\"mixed\"");
        let parsed: Language = serde_json::from_str("\"gu\"").unwrap();
        assert_eq!(parsed, Language::Gujarati);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("HI"), Some(Language::Hindi));
        assert_eq!(Language::from_code("gujarati"), Some(Language::Gujarati));
        assert_eq!(Language::from_code("ta"), None);
    }

    #[test]
    fn test_script_of_char() {
        assert_eq!(Script::of_char('a'), Some(Script::Latin));
        assert_eq!(Script::of_char('न'), Some(Script::Devanagari));
        assert_eq!(Script::of_char('ન'), Some(Script::Gujarati));
        assert_eq!(Script::of_char('7'), None);
        assert_eq!(Script::of_char('é'), None);
    }
}
