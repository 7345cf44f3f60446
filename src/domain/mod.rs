//! Counting core: normalization, pattern construction, and matching.
//!
//! Nothing in here touches files or documents. Text comes in as a string,
//! a count comes out.

pub mod cache;
pub mod counter;
pub mod normalizer;
pub mod pattern;

pub use cache::{PatternBuilder, PatternCache};
pub use counter::{count_occurrences, count_with_pattern, Counter};
pub use normalizer::normalize;
pub use pattern::{CompiledPattern, Matches, PatternKey, PatternKind};
