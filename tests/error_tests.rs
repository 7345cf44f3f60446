//! Error handling tests.
//!
//! These tests verify error variants, display text, and how failures from
//! the document layer propagate.

use lexcount::{CountingService, LexcountError, PdfTextSource, PlainTextSource, TextSource};
use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_source_unavailable_display() {
    let err = LexcountError::SourceUnavailable {
        path: PathBuf::from("/docs/letter.pdf"),
        reason: "Password protected".to_string(),
    };

    let display = err.to_string();
    assert!(display.contains("letter.pdf"));
    assert!(display.contains("Password protected"));
    assert!(display.contains("Source unavailable"));
}

#[test]
fn test_io_error_display_and_source() {
    let err = LexcountError::Io {
        path: PathBuf::from("/test/out.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
    };

    let display = err.to_string();
    assert!(display.contains("/test/out.txt"));
    assert!(display.contains("IO error"));
    assert!(display.contains("read-only"));
    assert!(err.source().is_some());
    assert!(!err.is_source_unavailable());
}

#[test]
fn test_invalid_input_has_no_source() {
    let err = LexcountError::InvalidInput {
        parameter: "words".to_string(),
        reason: "No words to count".to_string(),
    };
    assert!(err.source().is_none());
}

#[test]
fn test_missing_pdf_is_source_unavailable() {
    let service = CountingService::with_pdf_source();
    let err = service
        .count(Path::new("/nonexistent/file.pdf"), &["word".to_string()])
        .unwrap_err();
    assert!(err.is_source_unavailable(), "unexpected error: {}", err);
}

#[test]
fn test_corrupt_pdf_is_source_unavailable() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.pdf");
    std::fs::write(&path, b"%PDF-1.4 this is not really a pdf")?;

    let err = PdfTextSource::new().extract_text(&path).unwrap_err();
    assert!(err.is_source_unavailable(), "unexpected error: {}", err);
    Ok(())
}

#[test]
fn test_non_utf8_text_is_source_unavailable() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("latin1.txt");
    std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe])?;

    let err = PlainTextSource::new().extract_text(&path).unwrap_err();
    assert!(err.is_source_unavailable());
    Ok(())
}

#[test]
fn test_error_converts_into_anyhow() {
    let err = LexcountError::InvalidInput {
        parameter: "iterations".to_string(),
        reason: "zero".to_string(),
    };
    let wrapped: anyhow::Error = err.into();
    assert!(wrapped.to_string().contains("iterations"));
}

#[test]
fn test_directory_input_is_source_unavailable_for_both_sources() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let pdf_dir = temp_dir.path().join("chapter.pdf");
    std::fs::create_dir(&pdf_dir)?;

    let err = PlainTextSource::new().extract_text(temp_dir.path()).unwrap_err();
    assert!(err.is_source_unavailable(), "unexpected error: {}", err);

    let err = PdfTextSource::new().extract_text(&pdf_dir).unwrap_err();
    assert!(err.is_source_unavailable(), "unexpected error: {}", err);

    let err = CountingService::with_pdf_source()
        .count(&pdf_dir, &["x".to_string()])
        .unwrap_err();
    assert!(err.is_source_unavailable(), "unexpected error: {}", err);
    assert!(err.to_string().starts_with("Source unavailable"));
    Ok(())
}
