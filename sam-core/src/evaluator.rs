//! Sentiment evaluators
//!
//! Every evaluator maps text to an [`Evaluation`] through the same
//! [`Evaluator`] contract, so the pipeline and reports treat the rule-based
//! classifier and the reference classifiers alike.

use crate::diagnostics::UnmatchedWords;
use crate::lexicon::{Lexicon, TriggerLexicon};
use crate::settings::Settings;
use crate::token::Sentence;
use crate::tokenizer::Tokenizer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Sentiment class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Negative,
    Neutral,
    Positive,
}

impl Label {
    /// Report order
    pub const ALL: [Label; 3] = [Label::Negative, Label::Neutral, Label::Positive];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
            Label::Positive => "Positive",
        }
    }

    /// Position in [`Label::ALL`]
    pub fn index(self) -> usize {
        match self {
            Label::Negative => 0,
            Label::Neutral => 1,
            Label::Positive => 2,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a total score becomes a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// `> 0` positive, `< 0` negative
    Strict,
    /// `> 0.1` positive, `< -0.1` negative
    DeadZone,
}

impl LabelPolicy {
    pub const DEAD_ZONE: f32 = 0.1;

    pub fn label(self, score: f32) -> Label {
        let bound = match self {
            LabelPolicy::Strict => 0.0,
            LabelPolicy::DeadZone => Self::DEAD_ZONE,
        };

        if score > bound {
            Label::Positive
        } else if score < -bound {
            Label::Negative
        } else {
            Label::Neutral
        }
    }
}

/// Label with the score it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub label: Label,
    pub score: f32,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.label, self.score)
    }
}

/// Common contract of all evaluators
pub trait Evaluator: Send + Sync {
    /// Identifier used in logs and output
    fn name(&self) -> &'static str;

    fn evaluate_sentence(&self, text: &str) -> Evaluation;

    /// Turn a score into an evaluation under this evaluator's policy
    fn classify(&self, score: f32) -> Evaluation;

    fn evaluate_sentences_in_comment(&self, sentences: &[&str]) -> Vec<Evaluation> {
        sentences
            .iter()
            .map(|sentence| self.evaluate_sentence(sentence))
            .collect()
    }

    /// Sum of the sentence scores, classified once
    fn evaluate_comment(&self, sentences: &[&str]) -> Evaluation {
        let total = sentences
            .iter()
            .map(|sentence| self.evaluate_sentence(sentence).score)
            .sum();
        self.classify(total)
    }
}

/// Per-sentence and overall result for one comment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentEvaluation {
    pub overall: Evaluation,
    pub sentences: Vec<Evaluation>,
}

/// Lexicon lookup plus trigger modifiers
#[derive(Debug)]
pub struct RuleBasedClassifier {
    tokenizer: Tokenizer,
    lexicon: Arc<Lexicon>,
    triggers: Arc<TriggerLexicon>,
    unmatched: Option<Arc<UnmatchedWords>>,
    sentence_ids: AtomicU64,
}

impl RuleBasedClassifier {
    pub fn new(settings: Arc<Settings>, lexicon: Arc<Lexicon>, triggers: Arc<TriggerLexicon>) -> Self {
        let unmatched = settings
            .write_non_match_tokens()
            .then(|| Arc::new(UnmatchedWords::new()));

        Self {
            tokenizer: Tokenizer::new(settings),
            lexicon,
            triggers,
            unmatched,
            sentence_ids: AtomicU64::new(1),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Present when the settings ask for unmatched words
    pub fn unmatched_words(&self) -> Option<&Arc<UnmatchedWords>> {
        self.unmatched.as_ref()
    }

    /// Assign lexicon scores, run trigger modifiers and sum
    ///
    /// The sum is taken in one forward pass: a modifier that changes a token
    /// before the current position does not affect the total.
    pub fn score_sentence(&self, sentence: &mut Sentence) -> f32 {
        let tokens = sentence.tokens_mut();

        for token in tokens.iter_mut() {
            match self.lexicon.get(&token.word) {
                Some(score) => token.sentiment = score as f32,
                None => {
                    if let Some(unmatched) = &self.unmatched {
                        unmatched.record(&token.word);
                    }
                }
            }
        }

        let mut total = 0.0;
        for position in 0..tokens.len() {
            if let Some(modifiers) = self.triggers.get(&tokens[position].word) {
                for modifier in modifiers {
                    modifier.apply_to(tokens, position);
                }
            }
            total += tokens[position].sentiment;
        }

        total
    }

    /// Tokenize a whole comment and score each of its sentences
    pub fn evaluate_comment_text(&self, text: &str) -> CommentEvaluation {
        let mut comment = self.tokenizer.tokenize_comment(text);

        let sentences: Vec<Evaluation> = comment
            .sentences
            .iter_mut()
            .map(|sentence| self.classify(self.score_sentence(sentence)))
            .collect();
        let total = sentences.iter().map(|e| e.score).sum();

        CommentEvaluation {
            overall: self.classify(total),
            sentences,
        }
    }
}

impl Evaluator for RuleBasedClassifier {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn evaluate_sentence(&self, text: &str) -> Evaluation {
        let id = self.sentence_ids.fetch_add(1, Ordering::Relaxed);
        let mut sentence = self.tokenizer.tokenize_sentence(text, id, true);
        let score = self.score_sentence(&mut sentence);
        self.classify(score)
    }

    fn classify(&self, score: f32) -> Evaluation {
        Evaluation {
            label: LabelPolicy::Strict.label(score),
            score,
        }
    }
}

/// Always neutral
#[derive(Debug, Default, Clone, Copy)]
pub struct BaselineClassifier;

impl Evaluator for BaselineClassifier {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn evaluate_sentence(&self, _text: &str) -> Evaluation {
        self.classify(0.0)
    }

    fn classify(&self, score: f32) -> Evaluation {
        Evaluation {
            label: LabelPolicy::DeadZone.label(score),
            score,
        }
    }
}

/// Uniform pick of -1, 0 or 1 per sentence
#[derive(Debug)]
pub struct RandomClassifier {
    rng: Mutex<StdRng>,
}

impl RandomClassifier {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for RandomClassifier {
    fn name(&self) -> &'static str {
        "random"
    }

    fn evaluate_sentence(&self, _text: &str) -> Evaluation {
        let pick: i32 = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .gen_range(-1..=1);
        self.classify(pick as f32)
    }

    fn classify(&self, score: f32) -> Evaluation {
        Evaluation {
            label: LabelPolicy::DeadZone.label(score),
            score,
        }
    }
}
