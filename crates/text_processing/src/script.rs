//! Script and language detection
//!
//! Classifies a transcript by which script families its letters come from.
//! One family maps to its language; more than one is code-mixed.

use std::collections::BTreeSet;
use voice_command_core::{Language, Script};

/// Detects scripts present in text
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    /// Script families with at least one letter in `text`
    pub fn scripts(&self, text: &str) -> BTreeSet<Script> {
        text.chars().filter_map(Script::of_char).collect()
    }

    /// Language of a transcript
    ///
    /// No letters at all counts as English.
    pub fn detect_language(&self, text: &str) -> Language {
        let scripts = self.scripts(text);
        let mut iter = scripts.iter();
        match (iter.next(), iter.next()) {
            (None, _) => Language::English,
            (Some(script), None) => Language::for_script(*script),
            (Some(_), Some(_)) => Language::Mixed,
        }
    }
}
