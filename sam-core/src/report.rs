//! Confusion matrix and accuracy

use crate::evaluator::Label;
use crate::pipeline::Comparison;
use serde::Serialize;
use std::fmt::{self, Write};

const CELL_WIDTH: usize = 11;

/// Counts indexed by annotated label (rows) and predicted label (columns)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    counts: [[u64; 3]; 3],
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, expected: Label, predicted: Label) {
        self.counts[expected.index()][predicted.index()] += 1;
    }

    pub fn from_comparisons(comparisons: &[Comparison]) -> Self {
        comparisons
            .iter()
            .map(|c| (c.expected.label, c.predicted.label))
            .collect()
    }

    pub fn count(&self, expected: Label, predicted: Label) -> u64 {
        self.counts[expected.index()][predicted.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Diagonal sum
    pub fn hits(&self) -> u64 {
        Label::ALL.iter().map(|&label| self.count(label, label)).sum()
    }

    /// Percentage of hits; 0 when empty
    pub fn accuracy(&self) -> f32 {
        match self.total() {
            0 => 0.0,
            total => self.hits() as f32 * 100.0 / total as f32,
        }
    }

    /// Text table, optionally without the neutral row and column
    pub fn render(&self, include_neutral: bool) -> String {
        let labels: Vec<Label> = Label::ALL
            .into_iter()
            .filter(|&label| include_neutral || label != Label::Neutral)
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "T: Annotated/Test, P: Predicted");

        let _ = write!(out, "{:<w$}", "", w = CELL_WIDTH + 1);
        for label in &labels {
            let _ = write!(out, "| {:<w$}", format!("P: {label}"), w = CELL_WIDTH + 1);
        }
        out.push('\n');

        for &expected in &labels {
            let _ = write!(out, "{:<w$}", format!("T: {expected}"), w = CELL_WIDTH + 1);
            for &predicted in &labels {
                let _ = write!(
                    out,
                    "| {:<w$}",
                    self.count(expected, predicted),
                    w = CELL_WIDTH + 1
                );
            }
            out.push('\n');
        }

        out
    }
}

impl FromIterator<(Label, Label)> for ConfusionMatrix {
    fn from_iter<I: IntoIterator<Item = (Label, Label)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for (expected, predicted) in iter {
            matrix.add(expected, predicted);
        }
        matrix
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Label::*;

    fn sample() -> ConfusionMatrix {
        [
            (Negative, Negative),
            (Negative, Neutral),
            (Neutral, Neutral),
            (Positive, Positive),
            (Positive, Positive),
            (Positive, Negative),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_counts_and_accuracy() {
        let matrix = sample();
        assert_eq!(matrix.total(), 6);
        assert_eq!(matrix.hits(), 4);
        assert_eq!(matrix.count(Positive, Positive), 2);
        assert_eq!(matrix.count(Positive, Negative), 1);
        assert_eq!(matrix.count(Negative, Positive), 0);
        assert!((matrix.accuracy() - 66.666_67).abs() < 1e-3);
    }

    #[test]
    fn test_empty_accuracy_is_zero() {
        assert_eq!(ConfusionMatrix::new().accuracy(), 0.0);
    }

    #[test]
    fn test_render_with_neutral() {
        let rendered = sample().render(true);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "T: Annotated/Test, P: Predicted");
        assert!(lines[1].contains("P: Neutral"));
        assert!(lines[4].starts_with("T: Positive"));
        assert_eq!(
            lines[4].split('|').map(str::trim).collect::<Vec<_>>(),
            vec!["T: Positive", "1", "0", "2"]
        );
    }

    #[test]
    fn test_render_without_neutral() {
        let rendered = sample().render(false);
        assert!(!rendered.contains("Neutral"));
        assert_eq!(rendered.lines().count(), 4);
    }
}
