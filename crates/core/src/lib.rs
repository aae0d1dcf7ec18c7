//! Core traits and types for the voice command interpreter
//!
//! This crate provides foundational types used across all other crates:
//! - The intent result contract handed to downstream routers
//! - Language and script definitions (English, Hindi, Gujarati, code-mixed)
//! - The `IntentInterpreter` trait implemented by every interpretation tier
//! - Error types

pub mod context;
pub mod error;
pub mod intent;
pub mod language;
pub mod traits;

pub use context::BusinessContext;
pub use error::{Error, Result};
pub use intent::{IntentPayload, IntentResult, ProcessingMethod, TieredResult, UNKNOWN_INTENT};
pub use language::{Language, Script};
pub use traits::IntentInterpreter;
