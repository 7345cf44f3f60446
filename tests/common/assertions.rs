//! Custom assertions for occurrence counting.
//!
//! Failure messages carry the word, its folded key and the normalized text
//! so a miscount can be read straight off the test output.

use lexcount::{normalize, Counter, PatternKey};

/// Asserts that `word` occurs exactly `expected` times in `text`.
///
/// Uses a fresh counter so the result does not depend on other tests.
pub fn assert_count(word: &str, text: &str, expected: usize) {
    let actual = Counter::new().count(word, text);
    assert_eq!(
        actual,
        expected,
        "count('{}') with key '{}' in normalized text {:?}",
        word,
        PatternKey::from_word(word),
        truncate(&normalize(text), 120)
    );
}

/// Asserts that every spelling in `variants` yields the same count in `text`.
pub fn assert_same_count(variants: &[&str], text: &str) {
    let counter = Counter::new();
    let counts: Vec<usize> = variants.iter().map(|w| counter.count(w, text)).collect();
    assert!(
        counts.windows(2).all(|pair| pair[0] == pair[1]),
        "variants {:?} produced different counts {:?}",
        variants,
        counts
    );
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}…", head)
    }
}
