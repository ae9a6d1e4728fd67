//! CSV datasets of comments and labelled comments

use crate::error::{Result, SamError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Column holding the comment text in unlabelled files
pub const DEFAULT_TEXT_COLUMN: usize = 1;

/// Share of rows held out by [`split`] unless told otherwise
pub const DEFAULT_TEST_FRACTION: f64 = 0.1;

/// An annotated comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub rating: f32,
    pub text: String,
}

/// Comment texts from one column, lower-cased and trimmed
///
/// Each text gets a leading space so an abbreviation opening the comment
/// still has a space in front of it.
pub fn read_comments<R: Read>(reader: R, column: usize, has_headers: bool) -> Result<Vec<String>> {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut comments = Vec::new();
    for record in rows.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let text = record.get(column).ok_or_else(|| SamError::DatasetError {
            line,
            reason: format!("missing text column {column}"),
        })?;
        comments.push(prepare_comment(text));
    }

    Ok(comments)
}

/// A comment as stored in JSON comment files
///
/// Field names match both the snake_case and the capitalised spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonComment {
    #[serde(alias = "Comment")]
    pub comment: String,
    #[serde(default, alias = "Sentences")]
    pub sentences: Vec<String>,
}

/// Comment texts from a JSON array of [`JsonComment`]
///
/// Texts are prepared the same way as [`read_comments`]; any stored sentence
/// split is ignored and recomputed by the tokenizer.
pub fn read_json_comments<R: Read>(reader: R) -> Result<Vec<String>> {
    let comments: Vec<JsonComment> = serde_json::from_reader(reader)?;
    Ok(comments.iter().map(|c| prepare_comment(&c.comment)).collect())
}

fn prepare_comment(text: &str) -> String {
    format!(" {}", text.trim().to_lowercase())
}

/// `rating,text` rows
pub fn read_labeled<R: Read>(reader: R, has_headers: bool) -> Result<Vec<LabeledSample>> {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut samples = Vec::new();
    for record in rows.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let (Some(rating), Some(text)) = (record.get(0), record.get(1)) else {
            return Err(SamError::DatasetError {
                line,
                reason: "expected 'rating,text'".to_string(),
            });
        };
        let rating: f32 = rating.trim().replace(',', ".").parse().map_err(|_| SamError::DatasetError {
            line,
            reason: format!("invalid rating '{rating}'"),
        })?;

        samples.push(LabeledSample {
            rating,
            text: text.trim().to_lowercase(),
        });
    }

    Ok(samples)
}

/// Write `rating,text` rows without a header
pub fn write_labeled<W: Write>(writer: W, samples: &[LabeledSample]) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for sample in samples {
        out.write_record([sample.rating.to_string(), sample.text.clone()])?;
    }
    out.flush()?;
    Ok(())
}

/// Shuffle and cut into `(training, test)`
///
/// The test part gets `floor(len * test_fraction)` samples.
pub fn split<R: Rng + ?Sized>(
    mut samples: Vec<LabeledSample>,
    test_fraction: f64,
    rng: &mut R,
) -> Result<(Vec<LabeledSample>, Vec<LabeledSample>)> {
    if !(0.0..=1.0).contains(&test_fraction) {
        return Err(SamError::ConfigurationError(format!(
            "test fraction must be between 0 and 1, got {test_fraction}"
        )));
    }

    samples.shuffle(rng);
    let test_len = (samples.len() as f64 * test_fraction).floor() as usize;
    let test = samples.split_off(samples.len() - test_len);
    Ok((samples, test))
}
