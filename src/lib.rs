//! Boundary-aware word and phrase occurrence counting.
//!
//! Counts how many times a word or phrase occurs in document text without
//! being fooled by the usual suspects: short words hiding inside longer
//! ones, punctuation glued to a word, emphasis markup such as `'''bold'''`
//! or `__italic__`, contractions, and mixed capitalization.
//!
//! # Architecture
//!
//! - [`domain`]: The counting core (normalizer, pattern builder and cache, counter)
//! - [`source`]: Document extraction, boilerplate cleaning, and the counting service
//! - [`error`]: Error handling for the document-facing layer
//!
//! # Quick Start
//!
//! ```
//! use lexcount::Counter;
//!
//! let counter = Counter::new();
//! let text = "Georges is my name. Oh! your name is georges? Not George, GEORGES.";
//!
//! assert_eq!(counter.count("Georges", text), 3);
//! assert_eq!(counter.count("george", text), 1);
//! ```
//!
//! # Examples
//!
//! ## Count words in a PDF
//!
//! ```no_run
//! use lexcount::CountingService;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = CountingService::with_pdf_source();
//! let words = vec!["insulin".to_string(), "get back to me".to_string()];
//!
//! let report = service.count(Path::new("letter.pdf"), &words)?;
//! println!("{} occurrence(s)", report.total());
//! # Ok(())
//! # }
//! ```
//!
//! ## Pre-warming patterns
//!
//! ```
//! use lexcount::Counter;
//!
//! let counter = Counter::new();
//! counter.warm(["dog", "almost", "skin-care"]);
//!
//! let counts = counter.count_many(&["dog", "skin-care"], "A skin-care dog; hotdogs.");
//! assert_eq!(counts, vec![1, 1]);
//! ```

pub mod domain;
pub mod error;
pub mod source;

pub use domain::{
    count_occurrences, normalize, CompiledPattern, Counter, PatternBuilder, PatternCache,
    PatternKey, PatternKind,
};
pub use error::{LexcountError, LexcountResult};
pub use source::{
    clean_text, CleaningOptions, CountReport, CountingService, PdfTextSource, PlainTextSource,
    TextSource, WordCount,
};
