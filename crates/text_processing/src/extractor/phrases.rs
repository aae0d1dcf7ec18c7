//! Token-sequence matching for lexicon forms

use crate::phonetic::PhoneticMatcher;

/// Pre-tokenized forms of one or more concepts
#[derive(Debug, Clone, Default)]
pub(crate) struct PhraseSet {
    /// Longest phrases first; equal lengths keep lexicon order
    phrases: Vec<Vec<String>>,
    /// Single-token forms long enough for fuzzy matching
    fuzzy_forms: Vec<String>,
}

impl PhraseSet {
    pub(crate) fn build<'a, I>(forms: I, fuzzy_min_length: usize) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut phrases: Vec<Vec<String>> = Vec::new();
        let mut fuzzy_forms = Vec::new();

        for form in forms {
            let phrase: Vec<String> = form.split(' ').map(str::to_string).collect();
            if phrase.len() == 1 && form.chars().count() > fuzzy_min_length {
                fuzzy_forms.push(form.clone());
            }
            if !phrases.contains(&phrase) {
                phrases.push(phrase);
            }
        }
        phrases.sort_by(|a, b| b.len().cmp(&a.len()));

        Self {
            phrases,
            fuzzy_forms,
        }
    }

    /// Length of the longest phrase starting at `tokens[start]`
    pub(crate) fn match_at(&self, tokens: &[&str], start: usize) -> Option<usize> {
        let rest = tokens.get(start..)?;
        self.phrases
            .iter()
            .find(|phrase| {
                phrase.len() <= rest.len() && phrase.iter().zip(rest).all(|(p, t)| p.as_str() == *t)
            })
            .map(Vec::len)
    }

    /// First phrase occurring anywhere in `tokens`, joined with spaces
    pub(crate) fn find_in(&self, tokens: &[&str]) -> Option<String> {
        (0..tokens.len()).find_map(|i| {
            self.match_at(tokens, i)
                .map(|len| tokens[i..i + len].join(" "))
        })
    }

    /// Drop every occurrence of every phrase
    pub(crate) fn strip<'t>(&self, tokens: &[&'t str]) -> Vec<&'t str> {
        let mut kept = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            match self.match_at(tokens, i) {
                Some(len) => i += len,
                None => {
                    kept.push(tokens[i]);
                    i += 1;
                }
            }
        }
        kept
    }

    /// Best fuzzy form for a token at or above `threshold`
    pub(crate) fn fuzzy_match(&self, token: &str, threshold: f32) -> Option<(&str, f32)> {
        PhoneticMatcher::best_match(token, &self.fuzzy_forms, threshold)
    }
}
