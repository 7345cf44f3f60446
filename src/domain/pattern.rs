//! Pattern keys, classification, and boundary-aware literal matching.
//!
//! A [`CompiledPattern`] is a literal scan for the folded key plus boundary
//! checks around every candidate hit:
//!
//! - **Complex** keys (phrases, contractions, words longer than five
//!   characters) must not touch an ASCII letter or digit on either side.
//! - **Simple** keys (short single tokens) additionally refuse an adjacent
//!   apostrophe, and may be followed by a run of two or more emphasis
//!   characters (`'`, `"`, `_`) before the right boundary is checked.

use std::fmt;
use std::ops::Range;

use memchr::memmem::Finder;

/// Quote glyphs stripped from both ends of a search word.
const KEY_QUOTES: &[char] = &['\'', '"', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Characters making up bold/italic wrappers such as `'''word'''` or `__word__`.
const EMPHASIS_MARKS: &[u8] = b"'\"_";

/// Minimum emphasis run a simple key may absorb on its right side.
const MIN_EMPHASIS_RUN: usize = 2;

/// Keys longer than this (in characters) are matched verbatim.
const SIMPLE_KEY_MAX_CHARS: usize = 5;

/// Folded, quote-stripped form of a search word. Used as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey(String);

impl PatternKey {
    /// Lowercases `word` and strips leading/trailing straight and curly quotes.
    pub fn from_word(word: &str) -> Self {
        Self(word.to_lowercase().trim_matches(KEY_QUOTES).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classifies the key according to the length/space/apostrophe rule.
    pub fn kind(&self) -> PatternKind {
        if self.0.contains(' ')
            || self.0.contains('\'')
            || self.0.chars().count() > SIMPLE_KEY_MAX_CHARS
        {
            PatternKind::Complex
        } else {
            PatternKind::Simple
        }
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Matching rule family chosen for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Short single token: apostrophe-aware boundaries, emphasis tolerant.
    Simple,
    /// Phrase or long/unusual token: verbatim with alphanumeric boundaries.
    Complex,
}

/// Immutable matcher for one [`PatternKey`].
///
/// Works on normalized text (see [`super::normalizer::normalize`]). The key
/// is scanned as a literal, so characters with special meaning to regex
/// engines need no escaping.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    key: PatternKey,
    kind: PatternKind,
    finder: Finder<'static>,
}

impl CompiledPattern {
    /// Builds the matcher for `key`. Same key, same behavior.
    pub fn new(key: PatternKey) -> Self {
        let kind = key.kind();
        let finder = Finder::new(key.as_str()).into_owned();
        Self { key, kind, finder }
    }

    pub fn key(&self) -> &PatternKey {
        &self.key
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Returns the first match starting at or after byte offset `start`.
    ///
    /// An empty key never matches.
    pub fn find_at(&self, text: &str, start: usize) -> Option<Range<usize>> {
        if self.key.is_empty() {
            return None;
        }

        let bytes = text.as_bytes();
        let key_len = self.key.as_str().len();
        let mut from = start;

        while from <= bytes.len() {
            let pos = from + self.finder.find(&bytes[from..])?;
            if self.left_boundary_ok(text, pos) {
                if let Some(end) = self.right_edge(text, pos + key_len) {
                    return Some(pos..end);
                }
            }
            // Hits always start on a char boundary; stepping one byte is safe
            // because the finder works on raw bytes.
            from = pos + 1;
        }

        None
    }

    /// Iterates over non-overlapping matches from left to right.
    pub fn find_iter<'p, 't>(&'p self, text: &'t str) -> Matches<'p, 't> {
        Matches {
            pattern: self,
            text,
            next: 0,
        }
    }

    /// Counts non-overlapping matches in already-normalized text.
    pub fn count(&self, normalized: &str) -> usize {
        self.find_iter(normalized).count()
    }

    pub fn is_match(&self, normalized: &str) -> bool {
        self.find_at(normalized, 0).is_some()
    }

    fn left_boundary_ok(&self, text: &str, pos: usize) -> bool {
        match text[..pos].chars().next_back() {
            None => true,
            Some(c) => !self.blocks_boundary(c),
        }
    }

    /// Resolves where a candidate ending at `end` stops, or `None` if the
    /// right boundary rejects it.
    fn right_edge(&self, text: &str, end: usize) -> Option<usize> {
        match self.kind {
            PatternKind::Complex => self.right_boundary_ok(text, end).then_some(end),
            PatternKind::Simple => {
                let run = text.as_bytes()[end..]
                    .iter()
                    .take_while(|b| EMPHASIS_MARKS.contains(*b))
                    .count();

                // Longest emphasis run first, then without any run.
                (MIN_EMPHASIS_RUN..=run)
                    .rev()
                    .chain(std::iter::once(0))
                    .map(|taken| end + taken)
                    .find(|&edge| self.right_boundary_ok(text, edge))
            }
        }
    }

    fn right_boundary_ok(&self, text: &str, at: usize) -> bool {
        match text[at..].chars().next() {
            None => true,
            Some(c) => !self.blocks_boundary(c),
        }
    }

    fn blocks_boundary(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || (self.kind == PatternKind::Simple && c == '\'')
    }
}

/// Iterator over match ranges produced by [`CompiledPattern::find_iter`].
#[derive(Debug)]
pub struct Matches<'p, 't> {
    pattern: &'p CompiledPattern,
    text: &'t str,
    next: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.text.len() {
            return None;
        }
        let found = self.pattern.find_at(self.text, self.next)?;
        self.next = found.end;
        Some(found)
    }
}
