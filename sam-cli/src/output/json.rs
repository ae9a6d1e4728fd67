//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use sam_core::EvaluationRecord;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects records and writes one array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<RecordData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordData {
    /// Position in the input, starting at 1
    pub id: u64,
    /// The comment text
    pub text: String,
    /// `Negative`, `Neutral` or `Positive`
    pub label: String,
    pub score: f32,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter (pretty printed)
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty: true,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &EvaluationRecord) -> Result<()> {
        self.records.push(RecordData {
            id: record.identifier.id,
            text: record.identifier.original.trim().to_string(),
            label: record.evaluation.label.as_str().to_string(),
            score: record.evaluation.score,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
