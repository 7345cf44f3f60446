//! Test fixtures and document builders.
//!
//! Provides builders for creating test PDFs and text files with specific
//! content, following the Builder pattern for clean test setup.

use anyhow::Result;
use printpdf::*;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// The sample paragraph shared by the scenario tests.
pub const GEORGES_TEXT: &str = "Georges is my name and I like python. Oh ! your name is georges? \
And you like Python!\n    Yes is is true, I like PYTHON\n    and my name is GEORGES";

/// Builder for creating test PDFs with one text line per entry.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let pdf = TestPdfBuilder::new()
///     .with_title("Memo")
///     .with_line("Please get back to me about the insulin order")
///     .build(Path::new("/tmp/memo.pdf"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestPdfBuilder {
    title: String,
    lines: Vec<String>,
    page_width: Mm,
    page_height: Mm,
}

impl TestPdfBuilder {
    /// Creates a new test PDF builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Test Document".to_string(),
            lines: Vec::new(),
            page_width: Mm(210.0),  // A4 width
            page_height: Mm(297.0), // A4 height
        }
    }

    /// Sets the document title (also written as the first line).
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Adds a line of body text.
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Builds the PDF and writes it to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        let (doc, page1, layer1) =
            PdfDocument::new(&self.title, self.page_width, self.page_height, "Layer 1");
        let current_layer = doc.get_page(page1).get_layer(layer1);
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut y = 270.0;
        current_layer.use_text(self.title.clone(), 14.0, Mm(20.0), Mm(y), &font);
        for line in &self.lines {
            y -= 10.0;
            current_layer.use_text(line.clone(), 12.0, Mm(20.0), Mm(y), &font);
        }

        doc.save(&mut BufWriter::new(fs::File::create(output_path)?))?;

        Ok(output_path.to_path_buf())
    }
}

impl Default for TestPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_text_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// Repeats the filler sentence used by the large-text scenarios.
pub fn filler(times: usize) -> String {
    "The quick brown fox jump over the lazy dog.The quick brown fox jump over the lazy dog."
        .repeat(times)
}
