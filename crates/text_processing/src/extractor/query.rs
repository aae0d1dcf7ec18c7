//! Residual query extraction

/// Fillers and postpositions removed from the residual query
///
/// Deliberately narrower than the noise lexicon: words like "for", "in" or
/// "wala" often carry query meaning ("cotton wala", "in stock").
pub(crate) const SAFE_FILLERS: &[&str] = &[
    "please", "can", "you", "will", "would", "okay", "ok",
    "ko", "ka", "ki", "ke", "mein", "se",
    "को", "का", "की", "के", "में", "से",
    "ને", "માં", "થી",
];

pub(crate) fn is_safe_filler(token: &str) -> bool {
    SAFE_FILLERS.contains(&token)
}

/// Apply `strip` until the token list stops shrinking
///
/// Removing one word can bring two others together into a phrase that
/// must also go, so a single pass is not enough.
pub(crate) fn strip_to_fixed_point<'t, F>(tokens: &[&'t str], strip: F) -> Vec<&'t str>
where
    F: Fn(&[&'t str]) -> Vec<&'t str>,
{
    let mut current = tokens.to_vec();
    loop {
        let next = strip(&current);
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

/// Join residual tokens; nothing left means no query
pub(crate) fn join_query(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}
