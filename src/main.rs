//! Word occurrence counting CLI.
//!
//! Counts words and phrases in PDF or plain-text documents, dumps the
//! cleaned text for inspection, and runs a repeatable counting benchmark.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use lexcount::{CountingService, LexcountError};

/// Word Occurrence Counter
///
/// Counts words and phrases in a document with boundary-aware matching.
/// Files ending in .pdf are extracted with pdf-extract; anything else is read as text.
#[derive(Parser)]
#[command(name = "lexcount")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count occurrences of each word or phrase
    Count {
        /// Input document (PDF or plain text)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Words or phrases to count
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,
    },

    /// Extract the text that counting operates on
    Extract {
        /// Input document (PDF or plain text)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip boilerplate removal and whitespace collapsing
        #[arg(long)]
        raw: bool,
    },

    /// Repeatedly count a word list against a document and report timing
    Bench {
        /// Input document (PDF or plain text)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Number of passes over the word list
        #[arg(short = 'n', long, default_value_t = 400)]
        iterations: usize,

        /// Words or phrases to count
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,
    },
}

/// Command handler owning the counting service for one input.
struct CountHandler {
    service: CountingService,
}

impl CountHandler {
    fn new(input: &Path) -> Self {
        Self {
            service: CountingService::for_path(input),
        }
    }

    fn count(&self, input: &Path, words: &[String]) -> Result<()> {
        let report = self
            .service
            .count(input, words)
            .with_context(|| "Counting failed")?;

        tracing::debug!(text_len = report.text_len, "scanned cleaned text");
        for entry in &report.counts {
            println!("{}\t{}", entry.word, entry.count);
        }
        println!("total\t{}", report.total());

        Ok(())
    }

    fn extract(&self, input: &Path, output: Option<&Path>, raw: bool) -> Result<()> {
        let text = if raw {
            self.service.extract_text(input)
        } else {
            self.service.load_text(input)
        }
        .with_context(|| "Text extraction failed")?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &text)
                .map_err(|e| LexcountError::Io {
                    path: output_path.to_path_buf(),
                    source: e,
                })
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Extracted {} characters → {}",
                text.len(),
                output_path.display()
            );
        } else {
            println!("{}", text);
        }

        Ok(())
    }

    fn bench(&self, input: &Path, words: &[String], iterations: usize) -> Result<()> {
        if iterations == 0 {
            anyhow::bail!("--iterations must be at least 1");
        }

        let text = self
            .service
            .load_text(input)
            .with_context(|| "Text extraction failed")?;

        let counter = self.service.counter();
        counter.warm(words);

        let started = Instant::now();
        let mut total = 0usize;
        for _ in 0..iterations {
            total += counter.count_many(words, &text).iter().sum::<usize>();
        }
        let elapsed = started.elapsed();

        tracing::info!(iterations, words = words.len(), ?elapsed, "benchmark finished");
        println!(
            "Counted {} occurrence(s) across {} word(s) x {} iteration(s) in {:.6}s",
            total,
            words.len(),
            iterations,
            elapsed.as_secs_f64()
        );

        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Count { input, words } => {
            CountHandler::new(input).count(input, words)?;
        }
        Commands::Extract { input, output, raw } => {
            CountHandler::new(input).extract(input, output.as_deref(), *raw)?;
        }
        Commands::Bench {
            input,
            iterations,
            words,
        } => {
            CountHandler::new(input).bench(input, words, *iterations)?;
        }
    }

    Ok(())
}
