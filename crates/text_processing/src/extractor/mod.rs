//! Rule-based command extraction
//!
//! Turns a raw transcript into an [`IntentResult`] without any network
//! access:
//!
//! 1. normalize (lower-case, trim, nukta decomposition) and tokenize
//! 2. detect language from the scripts present
//! 3. action: exact phrase scan in definition order, then a length-gated
//!    fuzzy pass over romanized forms
//! 4. target: exact phrase scan only
//! 5. query: transcript minus action, target and safe fillers
//! 6. filters: priority, status and location phrases from the full transcript
//! 7. confidence from what was found
//!
//! Extraction is a pure function of the transcript and the lexicon.

mod phrases;
mod query;

use tracing::{debug, warn};
use voice_command_config::constants::{confidence, fuzzy};
use voice_command_config::ExtractorSettings;
use voice_command_core::{IntentPayload, IntentResult};

use crate::lexicon::{ActionKind, Concept, FilterKind, Lexicon, LexiconError, TargetKind};
use crate::script::ScriptDetector;
use crate::text::{normalize_transcript, tokenize};
use phrases::PhraseSet;

/// Extractor tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractorConfig {
    /// Minimum similarity for a fuzzy action hit
    pub fuzzy_threshold: f32,
    /// Tokens and forms must be strictly longer than this to be fuzzy matched
    pub fuzzy_min_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: fuzzy::ACTION_THRESHOLD,
            fuzzy_min_length: fuzzy::MIN_TOKEN_LENGTH,
        }
    }
}

impl From<&ExtractorSettings> for ExtractorConfig {
    fn from(settings: &ExtractorSettings) -> Self {
        Self {
            fuzzy_threshold: settings.fuzzy_threshold,
            fuzzy_min_length: settings.fuzzy_min_length,
        }
    }
}

/// How an action was recognised
#[derive(Debug, Clone, PartialEq)]
pub enum MatchMethod {
    /// A lexicon phrase occurs verbatim
    Exact { form: String },
    /// A transcript token is phonetically close to a lexicon form
    Fuzzy {
        token: String,
        form: String,
        score: f32,
    },
}

/// Recognised action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionMatch {
    pub kind: ActionKind,
    pub method: MatchMethod,
}

impl ActionMatch {
    pub fn is_fuzzy(&self) -> bool {
        matches!(self.method, MatchMethod::Fuzzy { .. })
    }
}

/// Transcript -> intent extractor
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    lexicon: Lexicon,
    config: ExtractorConfig,
    detector: ScriptDetector,
    actions: Vec<(ActionKind, PhraseSet)>,
    targets: Vec<(TargetKind, PhraseSet)>,
    filters: Vec<(FilterKind, PhraseSet)>,
    /// Every connective and filler form
    noise: PhraseSet,
}

impl CommandExtractor {
    pub fn new(lexicon: Lexicon, config: ExtractorConfig) -> Self {
        for conflict in lexicon.conflicts() {
            warn!(
                form = %conflict.form,
                first = %conflict.first,
                second = %conflict.second,
                phrase = conflict.phrase.as_deref(),
                "Lexicon form shared by two concepts; first one wins"
            );
        }

        let min_len = config.fuzzy_min_length;
        let actions = ActionKind::ALL
            .into_iter()
            .map(|kind| (kind, PhraseSet::build(lexicon.forms(Concept::Action(kind)), min_len)))
            .collect();
        let targets = TargetKind::ALL
            .into_iter()
            .map(|kind| (kind, PhraseSet::build(lexicon.forms(Concept::Target(kind)), min_len)))
            .collect();
        let filters = FilterKind::ALL
            .into_iter()
            .map(|kind| (kind, PhraseSet::build(lexicon.forms(Concept::Filter(kind)), min_len)))
            .collect();
        let noise = PhraseSet::build(
            Concept::all()
                .filter(|c| matches!(c, Concept::Noise(_)))
                .flat_map(|c| lexicon.forms(c)),
            min_len,
        );

        debug!(
            forms = lexicon.len(),
            languages = lexicon.languages().len(),
            "Command extractor ready"
        );

        Self {
            lexicon,
            config,
            detector: ScriptDetector::new(),
            actions,
            targets,
            filters,
            noise,
        }
    }

    /// Built-in lexicon plus the optional extension file from settings
    pub fn from_settings(settings: &ExtractorSettings) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon::builtin();
        if let Some(path) = &settings.lexicon_extension_path {
            lexicon.load_extension(path)?;
        }
        Ok(Self::new(lexicon, ExtractorConfig::from(settings)))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Interpret one transcript
    pub fn process(&self, transcript: &str) -> IntentResult {
        let normalized = normalize_transcript(transcript);
        let language = self.detector.detect_language(&normalized);
        let tokens = tokenize(&normalized);

        if tokens.is_empty() {
            debug!(language = %language, "Empty transcript");
            return IntentResult::unknown(transcript, language);
        }

        let action = self.action_in(&tokens);
        let target = self.target_in(&tokens);
        let query = self.query_in(&tokens, action.as_ref().map(|m| m.kind), target);
        let filters = self.filters_in(&tokens);

        let confidence = Self::confidence(action.is_some(), target.is_some(), query.as_deref());
        let intent = match &action {
            Some(m) => m.kind.intent_name(),
            None => voice_command_core::UNKNOWN_INTENT.to_string(),
        };

        debug!(
            intent = %intent,
            confidence,
            language = %language,
            fuzzy = action.as_ref().map_or(false, ActionMatch::is_fuzzy),
            target = target.map(|t| t.name()),
            filters = filters.len(),
            "Extracted command"
        );

        let mut payload = IntentPayload {
            action: action.map(|m| m.kind.payload_value()),
            target: target.map(|t| t.payload_value()),
            query,
            filters: Vec::with_capacity(filters.len()),
        };
        for filter in filters {
            payload.push_filter(filter);
        }

        IntentResult {
            intent,
            confidence,
            payload,
            original_text: transcript.to_string(),
            language,
        }
    }

    /// Action of a transcript, exact phrases first, then fuzzy
    pub fn detect_action(&self, transcript: &str) -> Option<ActionMatch> {
        let normalized = normalize_transcript(transcript);
        self.action_in(&tokenize(&normalized))
    }

    /// Target of a transcript (exact phrases only)
    pub fn detect_target(&self, transcript: &str) -> Option<TargetKind> {
        let normalized = normalize_transcript(transcript);
        self.target_in(&tokenize(&normalized))
    }

    /// Filter phrases of a transcript, first-seen order, no duplicates
    pub fn extract_filters(&self, transcript: &str) -> Vec<String> {
        let normalized = normalize_transcript(transcript);
        self.filters_in(&tokenize(&normalized))
    }

    /// Whether a transcript holds nothing but connectives and fillers
    ///
    /// Empty transcripts count as noise-only.
    pub fn is_noise_only(&self, transcript: &str) -> bool {
        let normalized = normalize_transcript(transcript);
        let tokens = tokenize(&normalized);
        self.noise.strip(&tokens).is_empty()
    }

    fn action_in(&self, tokens: &[&str]) -> Option<ActionMatch> {
        for (kind, phrases) in &self.actions {
            if let Some(form) = phrases.find_in(tokens) {
                return Some(ActionMatch {
                    kind: *kind,
                    method: MatchMethod::Exact { form },
                });
            }
        }

        let candidates: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|t| t.chars().count() > self.config.fuzzy_min_length)
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let threshold = self.config.fuzzy_threshold;
        for (kind, phrases) in &self.actions {
            for token in &candidates {
                if let Some((form, score)) = phrases.fuzzy_match(token, threshold) {
                    debug!(
                        token = %token,
                        form = %form,
                        score,
                        action = kind.name(),
                        "Fuzzy action match"
                    );
                    return Some(ActionMatch {
                        kind: *kind,
                        method: MatchMethod::Fuzzy {
                            token: token.to_string(),
                            form: form.to_string(),
                            score,
                        },
                    });
                }
            }
        }

        None
    }

    fn target_in(&self, tokens: &[&str]) -> Option<TargetKind> {
        self.targets
            .iter()
            .find(|(_, phrases)| phrases.find_in(tokens).is_some())
            .map(|(kind, _)| *kind)
    }

    fn query_in(
        &self,
        tokens: &[&str],
        action: Option<ActionKind>,
        target: Option<TargetKind>,
    ) -> Option<String> {
        let action_phrases = action.and_then(|kind| self.phrases_of_action(kind));
        let target_phrases = target.and_then(|kind| self.phrases_of_target(kind));

        let residual = query::strip_to_fixed_point(tokens, |current| {
            let mut next = current.to_vec();
            if let Some(phrases) = action_phrases {
                next = phrases.strip(&next);
                next.retain(|token| !self.is_fuzzy_action_token(phrases, token));
            }
            if let Some(phrases) = target_phrases {
                next = phrases.strip(&next);
            }
            next.retain(|token| !query::is_safe_filler(token));
            next
        });

        query::join_query(&residual)
    }

    fn filters_in(&self, tokens: &[&str]) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            // Longest phrase across all filter kinds; ties go to the earlier kind
            let best = self
                .filters
                .iter()
                .filter_map(|(_, phrases)| phrases.match_at(tokens, i))
                .fold(None, |best: Option<usize>, len| match best {
                    Some(b) if b >= len => Some(b),
                    _ => Some(len),
                });

            match best {
                Some(len) => {
                    let filter = tokens[i..i + len].join(" ");
                    if !found.contains(&filter) {
                        found.push(filter);
                    }
                    i += len;
                }
                None => i += 1,
            }
        }

        found
    }

    fn phrases_of_action(&self, kind: ActionKind) -> Option<&PhraseSet> {
        self.actions.iter().find(|(k, _)| *k == kind).map(|(_, p)| p)
    }

    fn phrases_of_target(&self, kind: TargetKind) -> Option<&PhraseSet> {
        self.targets.iter().find(|(k, _)| *k == kind).map(|(_, p)| p)
    }

    fn is_fuzzy_action_token(&self, phrases: &PhraseSet, token: &str) -> bool {
        token.chars().count() > self.config.fuzzy_min_length
            && phrases.fuzzy_match(token, self.config.fuzzy_threshold).is_some()
    }

    /// 0.6 for an action, +0.2 for a target, +0.2 for a query longer than
    /// two chars; nothing without an action
    fn confidence(has_action: bool, has_target: bool, query: Option<&str>) -> f32 {
        if !has_action {
            return 0.0;
        }
        let mut tenths = confidence::ACTION_TENTHS;
        if has_target {
            tenths += confidence::TARGET_TENTHS;
        }
        if query.map_or(false, |q| q.chars().count() > confidence::MIN_QUERY_CHARS) {
            tenths += confidence::QUERY_TENTHS;
        }
        f32::from(tenths.min(10)) / 10.0
    }
}

impl Default for CommandExtractor {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), ExtractorConfig::default())
    }
}
