//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use sam_core::EvaluationRecord;
use std::io::Write;

/// Markdown formatter - numbered list with a label count footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
    label_counts: [usize; 3],
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
            label_counts: [0; 3],
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &EvaluationRecord) -> Result<()> {
        self.record_count += 1;
        self.label_counts[record.evaluation.label.index()] += 1;
        writeln!(
            self.writer,
            "{}. **{}** ({}) {}",
            self.record_count,
            record.evaluation.label,
            record.evaluation.score,
            record.identifier.original.trim()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let [negative, neutral, positive] = self.label_counts;
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total comments: {}*", self.record_count)?;
        writeln!(
            self.writer,
            "*Negative: {negative}, Neutral: {neutral}, Positive: {positive}*"
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
