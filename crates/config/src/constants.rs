//! Centralized constants for the voice command interpreter
//!
//! Single source of truth for tunable thresholds and defaults. The fuzzy
//! threshold and length gate were picked empirically against real
//! transliteration variants; re-tune them against a labelled corpus rather
//! than adjusting them by hand.

/// Fuzzy matching parameters
pub mod fuzzy {
    /// Minimum phonetic similarity for a fuzzy action hit
    pub const ACTION_THRESHOLD: f32 = 0.8;

    /// Tokens and lexicon words must be strictly longer than this (in chars)
    /// to take part in fuzzy matching
    pub const MIN_TOKEN_LENGTH: usize = 4;

    /// Score for tokens whose normalized spellings are identical
    pub const NORMALIZED_MATCH_SCORE: f32 = 0.95;

    /// Weight of the phonetic-class score in the blended similarity
    pub const PHONETIC_WEIGHT: f32 = 0.7;

    /// Weight of the edit-distance score in the blended similarity
    pub const EDIT_WEIGHT: f32 = 0.3;
}

/// Confidence scoring (in tenths so sums stay exact)
pub mod confidence {
    /// Awarded when an action was recognised
    pub const ACTION_TENTHS: u8 = 6;

    /// Awarded when a target was recognised
    pub const TARGET_TENTHS: u8 = 2;

    /// Awarded when a residual query longer than `MIN_QUERY_CHARS` remains
    pub const QUERY_TENTHS: u8 = 2;

    /// Query must be longer than this (in chars) to count
    pub const MIN_QUERY_CHARS: usize = 2;

    /// Confidence assigned to unparsable AI replies
    pub const MALFORMED_AI_RESPONSE: f32 = 0.5;
}

/// AI tier defaults
pub mod dispatcher {
    /// AI calls allowed per calendar month
    pub const DEFAULT_MONTHLY_BUDGET: u32 = 100;

    /// Escalate when local confidence is below this
    pub const DEFAULT_ESCALATION_THRESHOLD: f32 = 0.6;

    /// Per-call provider timeout
    pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 5_000;
}

/// Default API endpoints
pub mod endpoints {
    pub const OPENAI_DEFAULT: &str = "https://api.openai.com/v1";
    pub const CLAUDE_DEFAULT: &str = "https://api.anthropic.com";
}

/// Default per-call costs (USD)
pub mod costs {
    pub const OPENAI_PER_CALL: f64 = 0.002;
    pub const CLAUDE_PER_CALL: f64 = 0.003;
}
