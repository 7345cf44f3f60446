//! Text normalization ahead of boundary matching.

use once_cell::sync::Lazy;
use regex::Regex;

/// Punctuation that never carries lexical meaning inside a word or phrase.
///
/// Hyphens, apostrophes, underscores and non-ASCII quote glyphs are left
/// alone; the pattern boundaries deal with those.
fn punctuation() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#"[,!?;:()"]"#).expect("Valid punctuation regex"));
    &PATTERN
}

/// Case-folds `text` and replaces each neutral punctuation character with a space.
///
/// Every replaced character is ASCII and becomes exactly one space, so byte
/// offsets in the result line up with the lowercased input.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    punctuation().replace_all(&lowered, " ").into_owned()
}
