//! Rule-based sentiment scoring of Danish comments
//!
//! Comments are split into sentences and tokens by a regex-driven
//! [`Tokenizer`]. Each token gets its base score from a [`Lexicon`]; trigger
//! words from a [`TriggerLexicon`] then run positional [`Modifier`]s over
//! their neighbours (negation, intensifiers, punctuation runs, fixed
//! phrases). The sentence score is the sum of the token scores.
//!
//! # Example
//!
//! ```rust
//! use sam_core::{Evaluator, Label, Lexicon, Modifier, RuleBasedClassifier, Settings, TriggerLexicon};
//! use std::sync::Arc;
//!
//! let lexicon: Lexicon = [("godt", 1), ("nedern", -1)].into_iter().collect();
//! let mut triggers = TriggerLexicon::new();
//! triggers.register("ikke", Modifier::Mult { amount: -1.0, distance: 2 });
//!
//! let classifier = RuleBasedClassifier::new(
//!     Arc::new(Settings::default()),
//!     Arc::new(lexicon),
//!     Arc::new(triggers),
//! );
//!
//! let evaluation = classifier.evaluate_sentence("Det er ikke godt.");
//! assert_eq!(evaluation.label, Label::Negative);
//! assert_eq!(evaluation.score, -1.0);
//! ```

pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod evaluator;
pub mod intern;
pub mod lexicon;
pub mod modifier;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod token;
pub mod tokenizer;

pub use dataset::LabeledSample;
pub use diagnostics::UnmatchedWords;
pub use error::{Result, SamError};
pub use evaluator::{
    BaselineClassifier, CommentEvaluation, Evaluation, Evaluator, Label, LabelPolicy,
    RandomClassifier, RuleBasedClassifier,
};
pub use lexicon::{Lexicon, TriggerLexicon};
pub use modifier::Modifier;
pub use pipeline::{Comparison, EvaluationRecord};
pub use report::ConfusionMatrix;
pub use settings::{Settings, SettingsConfig};
pub use token::{Comment, Identifier, IdentifierKind, Sentence, Token};
pub use tokenizer::Tokenizer;
