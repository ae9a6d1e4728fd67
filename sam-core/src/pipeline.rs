//! Batch evaluation and comparison against labelled data

use crate::dataset::LabeledSample;
use crate::error::Result;
use crate::evaluator::{Evaluation, Evaluator};
use crate::token::Identifier;
use serde::Serialize;
use std::fmt;

#[cfg(feature = "parallel")]
use crate::error::SamError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result for one evaluated text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    pub identifier: Identifier,
    pub evaluation: Evaluation,
}

impl fmt::Display for EvaluationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.evaluation, self.identifier.original.trim())
    }
}

/// Annotated label versus predicted label for one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub identifier: Identifier,
    pub expected: Evaluation,
    pub predicted: Evaluation,
}

impl Comparison {
    pub fn hit(&self) -> bool {
        self.expected.label == self.predicted.label
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.hit() { "hit" } else { "miss" };
        write!(
            f,
            "{outcome} expected {} predicted {} - {}",
            self.expected,
            self.predicted,
            self.identifier.original.trim()
        )
    }
}

fn record<E: Evaluator + ?Sized>(evaluator: &E, index: usize, text: &str) -> EvaluationRecord {
    EvaluationRecord {
        identifier: Identifier::record(index as u64 + 1, text),
        evaluation: evaluator.evaluate_sentence(text),
    }
}

fn comparison<E: Evaluator + ?Sized>(evaluator: &E, index: usize, sample: &LabeledSample) -> Comparison {
    Comparison {
        identifier: Identifier::record(index as u64 + 1, sample.text.as_str()),
        expected: evaluator.classify(sample.rating),
        predicted: evaluator.evaluate_sentence(&sample.text),
    }
}

/// Evaluate texts one after another; ids are `1..=n` in input order
pub fn evaluate_sequential<E, S>(evaluator: &E, texts: &[S]) -> Vec<EvaluationRecord>
where
    E: Evaluator + ?Sized,
    S: AsRef<str>,
{
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| record(evaluator, index, text.as_ref()))
        .collect()
}

/// Compare every sample sequentially
pub fn compare<E: Evaluator + ?Sized>(evaluator: &E, samples: &[LabeledSample]) -> Vec<Comparison> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| comparison(evaluator, index, sample))
        .collect()
}

/// Worker count used when none is configured
pub fn default_thread_count() -> usize {
    #[cfg(feature = "parallel")]
    {
        num_cpus::get()
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

#[cfg(feature = "parallel")]
fn thread_pool(threads: usize) -> Result<rayon::ThreadPool> {
    let threads = if threads == 0 {
        default_thread_count()
    } else {
        threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| SamError::ParallelError(e.to_string()))
}

/// Evaluate on a thread pool of `threads` workers (0 = one per CPU)
///
/// Output order and ids match [`evaluate_sequential`].
#[cfg(feature = "parallel")]
pub fn evaluate_parallel<E, S>(evaluator: &E, texts: &[S], threads: usize) -> Result<Vec<EvaluationRecord>>
where
    E: Evaluator + ?Sized,
    S: AsRef<str> + Sync,
{
    let pool = thread_pool(threads)?;
    log::debug!("Evaluating {} texts on {} threads", texts.len(), pool.current_num_threads());

    Ok(pool.install(|| {
        texts
            .par_iter()
            .enumerate()
            .map(|(index, text)| record(evaluator, index, text.as_ref()))
            .collect()
    }))
}

#[cfg(not(feature = "parallel"))]
pub fn evaluate_parallel<E, S>(evaluator: &E, texts: &[S], _threads: usize) -> Result<Vec<EvaluationRecord>>
where
    E: Evaluator + ?Sized,
    S: AsRef<str> + Sync,
{
    Ok(evaluate_sequential(evaluator, texts))
}

/// Parallel [`compare`]
#[cfg(feature = "parallel")]
pub fn compare_parallel<E: Evaluator + ?Sized>(
    evaluator: &E,
    samples: &[LabeledSample],
    threads: usize,
) -> Result<Vec<Comparison>> {
    let pool = thread_pool(threads)?;

    Ok(pool.install(|| {
        samples
            .par_iter()
            .enumerate()
            .map(|(index, sample)| comparison(evaluator, index, sample))
            .collect()
    }))
}

#[cfg(not(feature = "parallel"))]
pub fn compare_parallel<E: Evaluator + ?Sized>(
    evaluator: &E,
    samples: &[LabeledSample],
    _threads: usize,
) -> Result<Vec<Comparison>> {
    Ok(compare(evaluator, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{BaselineClassifier, Label, LabelPolicy};

    /// Scores a text by its length parity
    struct ParityEvaluator;

    impl Evaluator for ParityEvaluator {
        fn name(&self) -> &'static str {
            "parity"
        }

        fn evaluate_sentence(&self, text: &str) -> Evaluation {
            self.classify(if text.len() % 2 == 0 { 1.0 } else { -1.0 })
        }

        fn classify(&self, score: f32) -> Evaluation {
            Evaluation {
                label: LabelPolicy::Strict.label(score),
                score,
            }
        }
    }

    fn texts() -> Vec<String> {
        (0..50).map(|i| "x".repeat(i)).collect()
    }

    #[test]
    fn test_sequential_ids_follow_input() {
        let records = evaluate_sequential(&ParityEvaluator, &["ab", "abc"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier.id, 1);
        assert_eq!(records[0].evaluation.label, Label::Positive);
        assert_eq!(records[1].identifier.id, 2);
        assert_eq!(records[1].evaluation.label, Label::Negative);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let texts = texts();
        let sequential = evaluate_sequential(&ParityEvaluator, &texts);
        let parallel = evaluate_parallel(&ParityEvaluator, &texts, 4).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_with_auto_threads() {
        let records = evaluate_parallel(&ParityEvaluator, &texts(), 0).unwrap();
        assert_eq!(records.len(), 50);
    }

    #[test]
    fn test_record_display() {
        let records = evaluate_sequential(&ParityEvaluator, &[" ab "]);
        assert_eq!(records[0].to_string(), "(Positive,1) - ab");
    }

    #[test]
    fn test_compare_uses_evaluator_policy_for_expected() {
        let samples = vec![
            LabeledSample {
                rating: 0.05,
                text: "a".to_string(),
            },
            LabeledSample {
                rating: 3.0,
                text: "b".to_string(),
            },
        ];

        let comparisons = compare(&BaselineClassifier, &samples);
        assert_eq!(comparisons[0].expected.label, Label::Neutral);
        assert!(comparisons[0].hit());
        assert_eq!(comparisons[1].expected.label, Label::Positive);
        assert!(!comparisons[1].hit());
        assert!(comparisons[1].to_string().starts_with("miss expected (Positive,3)"));
    }

    #[test]
    fn test_compare_parallel_matches_sequential() {
        let samples: Vec<_> = texts()
            .into_iter()
            .map(|text| LabeledSample { rating: 1.0, text })
            .collect();
        assert_eq!(
            compare(&ParityEvaluator, &samples),
            compare_parallel(&ParityEvaluator, &samples, 3).unwrap()
        );
    }
}
