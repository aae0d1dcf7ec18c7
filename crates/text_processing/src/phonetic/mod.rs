//! Phonetic similarity for romanized Hindi/Gujarati tokens
//!
//! Romanized Indic words have no standard spelling: "dhundho", "dhundo"
//! and "dhoondo" are the same verb. The matcher scores two tokens in
//! [0, 1]:
//!
//! 1. case-insensitive equality scores 1.0
//! 2. equal canonical spellings (see [`PhoneticMatcher::normalize`]) score
//!    0.95
//! 3. otherwise `0.7 * phonetic-class score + 0.3 * edit score`, capped
//!    at 1.0
//!
//! Any input is accepted. Non-Roman tokens simply score low against
//! Roman candidates.

use voice_command_config::constants::fuzzy::{EDIT_WEIGHT, NORMALIZED_MATCH_SCORE, PHONETIC_WEIGHT};

/// Short imperative stems and their canonical full form
const STEM_FORMS: &[(&str, &str)] = &[
    ("kr", "karo"),
    ("kro", "karo"),
    ("kar", "karo"),
    ("dekh", "dekho"),
    ("dekhe", "dekho"),
    ("dikha", "dikhao"),
    ("dikhaa", "dikhao"),
    ("bata", "batao"),
];

/// Aspirated digraphs and their folded spelling
fn fold_aspirate(c: char) -> Option<char> {
    match c {
        'b' => Some('b'),
        'g' => Some('g'),
        't' => Some('t'),
        'd' => Some('d'),
        'k' => Some('k'),
        'p' => Some('f'),
        _ => None,
    }
}

/// Coarse phonetic class of a letter
fn phonetic_class(c: char) -> char {
    match c {
        'a' | 'e' | 'i' | 'o' | 'u' => 'V',
        'b' | 'p' => 'B',
        'd' | 't' => 'D',
        'k' | 'g' => 'K',
        's' | 'z' | 'j' => 'S',
        'l' | 'r' => 'L',
        'm' | 'n' => 'N',
        other => other,
    }
}

/// Transliteration-tolerant token matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneticMatcher;

impl PhoneticMatcher {
    /// Similarity of two tokens in [0, 1]
    pub fn similarity(a: &str, b: &str) -> f32 {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();

        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }

        let norm_a = Self::normalize(&a);
        let norm_b = Self::normalize(&b);
        if norm_a == norm_b {
            return NORMALIZED_MATCH_SCORE;
        }

        let phonetic = Self::pattern_score(
            &Self::phonetic_pattern(&norm_a),
            &Self::phonetic_pattern(&norm_b),
        );
        let edit = Self::edit_score(&norm_a, &norm_b);

        (PHONETIC_WEIGHT * phonetic + EDIT_WEIGHT * edit).min(1.0)
    }

    /// Canonical spelling of a romanized token
    ///
    /// Lower-cases, collapses doubled letters, expands short imperative
    /// stems (`kr` -> `karo`), folds `-ho`/`-he` endings to `-o`, and
    /// de-aspirates `bh gh th dh kh` (and `ph` -> `f`).
    pub fn normalize(token: &str) -> String {
        let lower = token.trim().to_lowercase();

        let mut collapsed = String::with_capacity(lower.len());
        let mut prev = None;
        for c in lower.chars() {
            if prev != Some(c) {
                collapsed.push(c);
            }
            prev = Some(c);
        }

        let mut word = STEM_FORMS
            .iter()
            .find(|(stem, _)| *stem == collapsed)
            .map(|(_, full)| full.to_string())
            .unwrap_or(collapsed);

        if word.chars().count() > 3 && (word.ends_with("ho") || word.ends_with("he")) {
            word.truncate(word.len() - 2);
            word.push('o');
        }

        let chars: Vec<char> = word.chars().collect();
        let mut folded = String::with_capacity(word.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            match (fold_aspirate(c), chars.get(i + 1)) {
                (Some(plain), Some('h')) => {
                    folded.push(plain);
                    i += 2;
                }
                _ => {
                    folded.push(c);
                    i += 1;
                }
            }
        }
        folded
    }

    /// Map each letter to its coarse phonetic class
    pub fn phonetic_pattern(token: &str) -> String {
        token.chars().map(phonetic_class).collect()
    }

    /// Calculate Levenshtein edit distance between two strings
    pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();
        let len1 = s1_chars.len();
        let len2 = s2_chars.len();

        if len1 == 0 {
            return len2;
        }
        if len2 == 0 {
            return len1;
        }

        // Two rows instead of the full matrix
        let mut prev_row: Vec<usize> = (0..=len2).collect();
        let mut curr_row: Vec<usize> = vec![0; len2 + 1];

        for i in 1..=len1 {
            curr_row[0] = i;
            for j in 1..=len2 {
                let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);
                curr_row[j] = (prev_row[j] + 1)
                    .min(curr_row[j - 1] + 1)
                    .min(prev_row[j - 1] + cost);
            }
            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        prev_row[len2]
    }

    /// Candidate with the highest score at or above `threshold`
    ///
    /// Ties keep the earliest candidate.
    pub fn best_match<'a, S: AsRef<str>>(
        word: &str,
        candidates: &'a [S],
        threshold: f32,
    ) -> Option<(&'a str, f32)> {
        let mut best: Option<(&'a str, f32)> = None;
        for candidate in candidates {
            let candidate = candidate.as_ref();
            let score = Self::similarity(word, candidate);
            if score < threshold {
                continue;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((candidate, score));
            }
        }
        best
    }

    /// Whether any word in `list` scores at or above `threshold`
    pub fn fuzzy_contains<S: AsRef<str>>(word: &str, list: &[S], threshold: f32) -> bool {
        list.iter()
            .any(|candidate| Self::similarity(word, candidate.as_ref()) >= threshold)
    }

    /// Positional class matches over the longer pattern's length
    fn pattern_score(a: &str, b: &str) -> f32 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let longest = a.len().max(b.len());
        if longest == 0 {
            return 0.0;
        }
        let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
        matches as f32 / longest as f32
    }

    fn edit_score(a: &str, b: &str) -> f32 {
        let longest = a.chars().count().max(b.chars().count());
        if longest == 0 {
            return 0.0;
        }
        1.0 - Self::levenshtein_distance(a, b) as f32 / longest as f32
    }
}
