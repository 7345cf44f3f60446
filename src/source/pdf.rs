//! Document sources: PDF via `pdf-extract`, and plain UTF-8 text.

use super::strategy::TextSource;
use crate::error::{LexcountError, LexcountResult};
use std::path::Path;

/// Extracts text from PDF documents.
///
/// Each extracted line is trimmed and blank lines are dropped, so page
/// breaks and layout padding do not leave whitespace islands behind.
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource;

impl PdfTextSource {
    pub fn new() -> Self {
        Self
    }

    fn tidy_lines(raw: &str) -> String {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextSource for PdfTextSource {
    fn extract_text(&self, input: &Path) -> LexcountResult<String> {
        let bytes = read_source(input)?;

        let raw = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            LexcountError::SourceUnavailable {
                path: input.to_path_buf(),
                reason: format!("PDF text extraction failed: {}", e),
            }
        })?;

        tracing::debug!(path = %input.display(), bytes = bytes.len(), chars = raw.len(), "extracted PDF text");
        Ok(Self::tidy_lines(&raw))
    }

    fn name(&self) -> &str {
        "PdfText"
    }
}

/// Reads a document that is already plain UTF-8 text.
#[derive(Debug, Clone, Default)]
pub struct PlainTextSource;

impl PlainTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PlainTextSource {
    fn extract_text(&self, input: &Path) -> LexcountResult<String> {
        let bytes = read_source(input)?;
        String::from_utf8(bytes).map_err(|e| LexcountError::SourceUnavailable {
            path: input.to_path_buf(),
            reason: format!("not valid UTF-8: {}", e),
        })
    }

    fn name(&self) -> &str {
        "PlainText"
    }
}

/// Picks a source from the file extension: `.pdf` or plain text.
pub fn source_for(input: &Path) -> Box<dyn TextSource> {
    let is_pdf = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        Box::new(PdfTextSource::new())
    } else {
        Box::new(PlainTextSource::new())
    }
}

/// Any failure to read the document (missing, a directory, no permission)
/// means the source is unavailable.
fn read_source(input: &Path) -> LexcountResult<Vec<u8>> {
    std::fs::read(input).map_err(|e| LexcountError::SourceUnavailable {
        path: input.to_path_buf(),
        reason: e.to_string(),
    })
}
