//! Document sources and the counting service.
//!
//! This layer sits outside the counting core: it gets text out of a
//! document, strips boilerplate, and feeds the result to a [`Counter`].

pub mod cleaning;
pub mod pdf;
pub mod strategy;

pub use cleaning::{clean_text, CleaningOptions};
pub use pdf::{source_for, PdfTextSource, PlainTextSource};
pub use strategy::{CountReport, TextSource, WordCount};

use crate::domain::Counter;
use crate::error::{LexcountError, LexcountResult};
use std::path::Path;

/// Counting service coordinating extraction, cleaning, and counting.
pub struct CountingService {
    source: Box<dyn TextSource>,
    cleaning: CleaningOptions,
    counter: Counter,
}

impl CountingService {
    /// Creates a service reading documents through `source`.
    pub fn new(source: Box<dyn TextSource>) -> Self {
        Self {
            source,
            cleaning: CleaningOptions::default(),
            counter: Counter::new(),
        }
    }

    /// Creates a service for PDF documents.
    pub fn with_pdf_source() -> Self {
        Self::new(Box::new(PdfTextSource::new()))
    }

    /// Creates a service whose source is chosen from the file extension.
    pub fn for_path(input: &Path) -> Self {
        Self::new(source_for(input))
    }

    /// Sets the cleaning passes applied to extracted text.
    pub fn with_cleaning(mut self, cleaning: CleaningOptions) -> Self {
        self.cleaning = cleaning;
        self
    }

    /// Replaces the counter, e.g. to share a warmed pattern cache.
    pub fn with_counter(mut self, counter: Counter) -> Self {
        self.counter = counter;
        self
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Extracts raw document text without cleaning.
    pub fn extract_text(&self, input: &Path) -> LexcountResult<String> {
        self.source.extract_text(input)
    }

    /// Extracts and cleans document text, ready for counting.
    #[tracing::instrument(skip_all, fields(path = %input.display(), source = self.source.name()))]
    pub fn load_text(&self, input: &Path) -> LexcountResult<String> {
        let raw = self.source.extract_text(input)?;
        let cleaned = self.cleaning.clean(&raw);
        tracing::debug!(raw_len = raw.len(), cleaned_len = cleaned.len(), "cleaned document text");
        Ok(cleaned)
    }

    /// Counts each of `words` in the document at `input`.
    ///
    /// # Arguments
    /// * `input` - Path to the document
    /// * `words` - Words or phrases to count
    ///
    /// # Returns
    /// One count per word, in the order given
    #[tracing::instrument(skip_all, fields(path = %input.display(), words = words.len()))]
    pub fn count(&self, input: &Path, words: &[String]) -> LexcountResult<CountReport> {
        if words.is_empty() {
            return Err(LexcountError::InvalidInput {
                parameter: "words".to_string(),
                reason: "No words to count".to_string(),
            });
        }

        let text = self.load_text(input)?;
        Ok(self.count_in_text(&text, words))
    }

    /// Counts each of `words` in already-cleaned `text`.
    pub fn count_in_text(&self, text: &str, words: &[String]) -> CountReport {
        let counts = self.counter.count_many(words, text);
        let report = CountReport {
            counts: words
                .iter()
                .zip(counts)
                .map(|(word, count)| WordCount {
                    word: word.clone(),
                    count,
                })
                .collect(),
            text_len: text.len(),
        };

        tracing::info!(total = report.total(), words = words.len(), "counted occurrences");
        report
    }
}
