//! Output formatting module

use crate::commands::OutputFormat;
use anyhow::{Context, Result};
use sam_core::EvaluationRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single record
    fn format_record(&mut self, record: &EvaluationRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Destination writer used by the formatters
pub type Sink = Box<dyn Write + Send + Sync>;

/// Stdout, or a buffered file when `output` is given
pub fn open_sink(output: Option<&Path>) -> Result<Sink> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    output: Option<&Path>,
    pretty_json: bool,
) -> Result<Box<dyn OutputFormatter>> {
    let sink = open_sink(output)?;
    Ok(match format {
        OutputFormat::Text => Box::new(TextFormatter::new(sink)),
        OutputFormat::Json => Box::new(JsonFormatter::new(sink).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(sink)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_formatter_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.md");

        let mut formatter = create_formatter(OutputFormat::Markdown, Some(&path), true).unwrap();
        formatter.finish().unwrap();
        drop(formatter);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("*Total comments: 0*"));
    }

    #[test]
    fn test_open_sink_bad_path() {
        let err = open_sink(Some(Path::new("/nonexistent/dir/out.txt"))).err().unwrap();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
