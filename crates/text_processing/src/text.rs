//! Transcript normalization and tokenization

use unicode_segmentation::UnicodeSegmentation;

/// Devanagari nukta sign
const NUKTA: char = '\u{093C}';

/// Base letter of a precomposed Devanagari nukta letter (U+0958..=U+095F)
fn nukta_base(c: char) -> Option<char> {
    let base = match c {
        '\u{0958}' => '\u{0915}', // qa -> ka
        '\u{0959}' => '\u{0916}', // khha -> kha
        '\u{095A}' => '\u{0917}', // ghha -> ga
        '\u{095B}' => '\u{091C}', // za -> ja
        '\u{095C}' => '\u{0921}', // dddha -> dda
        '\u{095D}' => '\u{0922}', // rha -> ddha
        '\u{095E}' => '\u{092B}', // fa -> pha
        '\u{095F}' => '\u{092F}', // yya -> ya
        _ => return None,
    };
    Some(base)
}

/// Lower-case, trim and decompose Devanagari nukta letters
///
/// Idempotent: `normalize_transcript(normalize_transcript(t)) ==
/// normalize_transcript(t)`.
pub fn normalize_transcript(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match nukta_base(c) {
            Some(base) => {
                out.push(base);
                out.push(NUKTA);
            }
            None => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Split normalized text into word tokens
///
/// Punctuation and whitespace are dropped; combining marks stay attached
/// to their letters.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Canonical shape of a lexicon word-form: normalized tokens joined by a
/// single space
pub fn canonical_form(word: &str) -> String {
    tokenize(&normalize_transcript(word)).join(" ")
}
