//! Tokens, sentences and comments

use crate::intern;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Word of the token that marks a consumed slot
pub const NULL_WORD: &str = "null";

/// A word or mark with its working sentiment
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub word: Arc<str>,
    pub sentiment: f32,
}

impl Token {
    pub fn new(word: Arc<str>) -> Self {
        Self {
            word,
            sentiment: 0.0,
        }
    }

    /// The neutralized placeholder left behind by modifiers
    pub fn null() -> Self {
        Self::new(intern::intern(NULL_WORD))
    }

    pub fn is_null(&self) -> bool {
        &*self.word == NULL_WORD && self.sentiment == 0.0
    }
}

/// Provenance of an [`Identifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Comment,
    Sentence,
    Record,
}

/// Numeric id plus the text it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub kind: IdentifierKind,
    pub id: u64,
    pub original: String,
}

impl Identifier {
    pub fn new(kind: IdentifierKind, id: u64, original: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            original: original.into(),
        }
    }

    pub fn comment(id: u64, original: impl Into<String>) -> Self {
        Self::new(IdentifierKind::Comment, id, original)
    }

    pub fn sentence(id: u64, original: impl Into<String>) -> Self {
        Self::new(IdentifierKind::Sentence, id, original)
    }

    pub fn record(id: u64, original: impl Into<String>) -> Self {
        Self::new(IdentifierKind::Record, id, original)
    }
}

/// Ordered tokens of one sentence
///
/// The token count is fixed at construction; only sentiments change.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    tokens: Vec<Token>,
    pub id: Identifier,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>, id: Identifier) -> Self {
        Self { tokens, id }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| &*t.word)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Sentence {
    /// `|tok|tok|[END]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words() {
            write!(f, "|{word}")?;
        }
        write!(f, "|[END]")
    }
}

/// Sentences of one comment
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub sentences: Vec<Sentence>,
    pub id: Identifier,
}

impl Comment {
    pub fn new(sentences: Vec<Sentence>, id: Identifier) -> Self {
        Self { sentences, id }
    }

    /// Render every sentence as `|tok|...|[END]`, concatenated
    pub fn trace(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sentence in &self.sentences {
            write!(f, "{sentence}")?;
        }
        Ok(())
    }
}
