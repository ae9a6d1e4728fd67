//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use sam_core::EvaluationRecord;
use std::io::Write;

/// Plain text formatter - one `(Label,score) - comment` line per record
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &EvaluationRecord) -> Result<()> {
        writeln!(self.writer, "{record}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
