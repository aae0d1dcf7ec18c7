//! Multilingual command extraction for the voice command interpreter
//!
//! This crate provides the offline, zero-cost tier:
//! - **Lexicon**: concept -> language -> word-forms for English, Hindi and
//!   Gujarati (native script and romanized)
//! - **Phonetic matching**: transliteration-tolerant token similarity
//! - **Script detection**: Latin / Devanagari / Gujarati, code-mixed input
//! - **Command extraction**: transcript -> `IntentResult`
//!
//! # Example
//!
//! ```
//! use voice_command_text_processing::CommandExtractor;
//!
//! let extractor = CommandExtractor::default();
//! let result = extractor.process("search Mumbai cotton");
//!
//! assert_eq!(result.intent, "SEARCH_COMMAND");
//! assert_eq!(result.payload.query.as_deref(), Some("mumbai cotton"));
//! ```

pub mod extractor;
pub mod lexicon;
pub mod phonetic;
pub mod script;
pub mod text;

pub use extractor::{ActionMatch, CommandExtractor, ExtractorConfig, MatchMethod};
pub use lexicon::{
    ActionKind, Category, Concept, FilterKind, Lexicon, LexiconConflict, LexiconError, NoiseKind,
    TargetKind,
};
pub use phonetic::PhoneticMatcher;
pub use script::ScriptDetector;
pub use text::{normalize_transcript, tokenize};
