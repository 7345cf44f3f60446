//! Boilerplate removal and whitespace collapsing for extracted text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Which boilerplate to strip before counting. Whitespace is always collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningOptions {
    figure_placeholders: bool,
    page_numbers: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            figure_placeholders: true,
            page_numbers: true,
        }
    }
}

impl CleaningOptions {
    /// Strips all known boilerplate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only collapses whitespace.
    pub fn whitespace_only() -> Self {
        Self {
            figure_placeholders: false,
            page_numbers: false,
        }
    }

    /// Toggles removal of `Figure N: ... Placeholder ...` captions.
    pub fn with_figure_placeholders(mut self, enabled: bool) -> Self {
        self.figure_placeholders = enabled;
        self
    }

    /// Toggles removal of lines holding nothing but a number.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.page_numbers = enabled;
        self
    }

    /// Applies the configured passes to `text`.
    pub fn clean(&self, text: &str) -> String {
        let mut text = text.to_string();

        if self.figure_placeholders {
            text = figure_placeholder().replace_all(&text, "").into_owned();
        }
        if self.page_numbers {
            text = page_number_line().replace_all(&text, "").into_owned();
        }

        whitespace_run().replace_all(&text, " ").trim().to_string()
    }
}

/// Cleans `text` with the default options.
pub fn clean_text(text: &str) -> String {
    CleaningOptions::default().clean(text)
}

fn figure_placeholder() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"Figure\s*\d+:\s*.*?Placeholder.*?\d*").expect("Valid figure regex")
    });
    &PATTERN
}

fn page_number_line() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?m)^\s*\d+\s*$").expect("Valid page number regex"));
    &PATTERN
}

fn whitespace_run() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Valid whitespace regex"));
    &PATTERN
}
