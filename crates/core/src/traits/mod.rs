//! Core traits for the voice command interpreter
//!
//! ```text
//! Interpretation:
//!   - IntentInterpreter: transcript → IntentResult (local extractor, paid AI providers)
//! ```

mod interpreter;

pub use interpreter::IntentInterpreter;
