//! Multilingual command lexicon
//!
//! Maps every [`Concept`] to per-language word-forms. Languages are plain
//! tags (`en`, `hi`, `hi-Latn`, `gu`, ...), so adding a language is a data
//! change: call [`Lexicon::extend`] or load a YAML extension file.
//!
//! Forms are stored in canonical shape (lower-case, nukta-decomposed,
//! single-spaced) so they compare directly against normalized transcript
//! tokens.

mod builtin;
pub mod concept;

pub use concept::{ActionKind, Category, Concept, FilterKind, NoiseKind, TargetKind};

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use thiserror::Error;

use crate::text::canonical_form;

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    let mut lexicon = Lexicon::empty();
    for (concept, lang, words) in builtin::BUILTIN_ENTRIES {
        lexicon.extend(*concept, lang, words.iter().copied());
    }
    lexicon
});

/// Lexicon errors
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid lexicon YAML: {0}")]
    Parse(String),

    #[error("Unknown concept: {0}")]
    UnknownConcept(String),
}

impl From<LexiconError> for voice_command_core::Error {
    fn from(err: LexiconError) -> Self {
        voice_command_core::Error::Lexicon(err.to_string())
    }
}

/// A word-form claimed by two concepts
///
/// Either both concepts share the category, or `form` is an action/target
/// form that also appears as a word of a multi-word filter phrase, which
/// `phrase` then holds. Actions and targets are matched before filters, so
/// such a phrase would leak its word into the action or target slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconConflict {
    pub form: String,
    /// Category of `first`
    pub category: Category,
    /// Earlier concept in definition order
    pub first: Concept,
    pub second: Concept,
    /// Multi-word form of `second` containing `form`
    pub phrase: Option<String>,
}

/// Concept -> language -> word-forms, plus a flattened lookup table
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: BTreeMap<Concept, BTreeMap<String, Vec<String>>>,
    /// All forms of a concept across languages, duplicate-free
    flattened: HashMap<Concept, Vec<String>>,
}

impl Lexicon {
    /// Lexicon with no words at all
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            flattened: HashMap::new(),
        }
    }

    /// The built-in English/Hindi/Gujarati lexicon
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Every known form of a concept, across all languages
    pub fn forms(&self, concept: Concept) -> &[String] {
        self.flattened
            .get(&concept)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Forms of a concept in one language
    pub fn forms_in(&self, concept: Concept, lang: &str) -> &[String] {
        self.entries
            .get(&concept)
            .and_then(|langs| langs.get(lang))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Language tags with at least one form
    pub fn languages(&self) -> Vec<String> {
        let tags: BTreeSet<&String> = self
            .entries
            .values()
            .flat_map(|langs| langs.keys())
            .collect();
        tags.into_iter().cloned().collect()
    }

    /// Whether `form` (already canonical) belongs to `concept`
    pub fn contains(&self, concept: Concept, form: &str) -> bool {
        self.forms(concept).iter().any(|f| f == form)
    }

    /// Total number of distinct forms
    pub fn len(&self) -> usize {
        self.flattened.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add word-forms for a concept in a language
    ///
    /// Forms are canonicalized; blanks and forms the concept already has
    /// are skipped. Returns how many forms were added.
    pub fn extend<I, S>(&mut self, concept: Concept, lang: &str, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lang = lang.trim();
        let mut added = 0;

        for word in words {
            let form = canonical_form(word.as_ref());
            if form.is_empty() || self.contains(concept, &form) {
                continue;
            }
            self.entries
                .entry(concept)
                .or_default()
                .entry(lang.to_string())
                .or_default()
                .push(form.clone());
            self.flattened.entry(concept).or_default().push(form);
            added += 1;
        }

        added
    }

    /// Merge a YAML document of the shape `CONCEPT: { lang: [words] }`
    pub fn extend_from_yaml(&mut self, yaml: &str) -> Result<usize, LexiconError> {
        let doc: BTreeMap<String, BTreeMap<String, Vec<String>>> =
            serde_yaml::from_str(yaml).map_err(|e| LexiconError::Parse(e.to_string()))?;

        // Validate every concept before touching the table
        let mut parsed = Vec::with_capacity(doc.len());
        for (name, langs) in doc {
            let concept: Concept = name
                .parse()
                .map_err(|_| LexiconError::UnknownConcept(name.clone()))?;
            parsed.push((concept, langs));
        }

        let mut added = 0;
        for (concept, langs) in parsed {
            for (lang, words) in langs {
                added += self.extend(concept, &lang, words);
            }
        }
        Ok(added)
    }

    /// Merge a YAML extension file
    pub fn load_extension(&mut self, path: impl AsRef<Path>) -> Result<usize, LexiconError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let added = self.extend_from_yaml(&yaml)?;
        tracing::debug!(path = %path.display(), added, "Loaded lexicon extension");
        Ok(added)
    }

    /// Word-forms shared by two concepts of the same category, and
    /// action/target forms hidden inside multi-word filter phrases
    pub fn conflicts(&self) -> Vec<LexiconConflict> {
        let mut owners: HashMap<(Category, &str), Concept> = HashMap::new();
        let mut conflicts = Vec::new();

        for concept in Concept::all() {
            for form in self.forms(concept) {
                match owners.get(&(concept.category(), form.as_str())) {
                    Some(&first) if first != concept => conflicts.push(LexiconConflict {
                        form: form.clone(),
                        category: concept.category(),
                        first,
                        second: concept,
                        phrase: None,
                    }),
                    Some(_) => {}
                    None => {
                        owners.insert((concept.category(), form.as_str()), concept);
                    }
                }
            }
        }

        let filter_phrases: Vec<(Concept, &String)> = Concept::all()
            .filter(|c| c.category() == Category::Filter)
            .flat_map(|c| self.forms(c).iter().map(move |form| (c, form)))
            .filter(|(_, form)| form.contains(' '))
            .collect();
        for concept in Concept::all() {
            if !matches!(concept.category(), Category::Action | Category::Target) {
                continue;
            }
            for form in self.forms(concept) {
                for &(filter, phrase) in &filter_phrases {
                    if phrase_has_words(phrase, form) {
                        conflicts.push(LexiconConflict {
                            form: form.clone(),
                            category: concept.category(),
                            first: concept,
                            second: filter,
                            phrase: Some(phrase.clone()),
                        });
                    }
                }
            }
        }

        conflicts
    }
}

/// Whether the words of `form` occur consecutively in `phrase`
fn phrase_has_words(phrase: &str, form: &str) -> bool {
    let haystack: Vec<&str> = phrase.split(' ').collect();
    let needle: Vec<&str> = form.split(' ').collect();
    needle.len() < haystack.len() && haystack.windows(needle.len()).any(|w| w == needle.as_slice())
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
