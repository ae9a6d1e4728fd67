//! Positional modifiers applied when a trigger word is scored
//!
//! A modifier rewrites sentiments of tokens around the trigger position. It
//! never adds or removes tokens; consumed tokens are replaced by
//! [`Token::null`].

use crate::error::{Result, SamError};
use crate::token::Token;
use fancy_regex::Regex;
use std::sync::{Arc, OnceLock};

/// Tokens that end a directional scan
pub const STOP_WORDS: [&str; 6] = ["!", ".", "?", ":", "(", ")"];

/// Sentiment given to the anchor of a mixed `!`/`?` run
pub const SPECIAL_SENTIMENT: f32 = -2.0;

fn mixed_punctuation() -> &'static Regex {
    static MIXED: OnceLock<Regex> = OnceLock::new();
    MIXED.get_or_init(|| {
        Regex::new(r"(![!?]+)(?=\?)|(\?[!?]+)(?=!)").expect("punctuation run pattern is valid")
    })
}

/// The closed set of modifier kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    /// Add `amount` to the first scored token ahead
    Add { amount: f32, distance: i32 },
    /// Subtract `amount` from the first scored token ahead
    Sub { amount: f32, distance: i32 },
    /// Multiply the first scored token ahead; negation is `amount = -1`
    Mult { amount: f32, distance: i32 },
    /// Mixed `!`/`?` runs starting at the trigger
    Special,
    /// A run of `threshold` or more copies of `literal`
    Repeating {
        amount: f32,
        distance: i32,
        literal: Arc<str>,
        threshold: usize,
    },
    /// A fixed phrase ahead of (`distance > 0`) or behind (`distance < 0`) the trigger
    Vending {
        amount: f32,
        distance: i32,
        phrase: Vec<Arc<str>>,
    },
}

impl Modifier {
    /// Build a vending modifier, checking the phrase covers the distance
    pub fn vending(amount: f32, distance: i32, phrase: Vec<Arc<str>>) -> Result<Self> {
        let needed = distance.unsigned_abs() as usize;
        if phrase.len() < needed {
            return Err(SamError::InvalidModifier(format!(
                "vending phrase has {} words but distance {} needs {}",
                phrase.len(),
                distance,
                needed
            )));
        }
        Ok(Self::Vending {
            amount,
            distance,
            phrase,
        })
    }

    /// Apply to `tokens`, anchored at `position`
    pub fn apply_to(&self, tokens: &mut [Token], position: usize) {
        if position >= tokens.len() {
            return;
        }

        match self {
            Self::Add { amount, distance } => {
                scan_ahead(tokens, position, *distance, |s| s + amount);
            }
            Self::Sub { amount, distance } => {
                scan_ahead(tokens, position, *distance, |s| s - amount);
            }
            Self::Mult { amount, distance } => {
                scan_ahead(tokens, position, *distance, |s| s * amount);
            }
            Self::Special => apply_special(tokens, position),
            Self::Repeating {
                amount,
                literal,
                threshold,
                ..
            } => apply_repeating(tokens, position, *amount, literal, *threshold),
            Self::Vending {
                amount,
                distance,
                phrase,
            } => {
                if *distance > 0 {
                    vend_ahead(tokens, position, *amount, *distance as usize, phrase);
                } else {
                    vend_behind(tokens, position, *amount, distance.unsigned_abs() as usize, phrase);
                }
            }
        }
    }

    /// Short kind name as used in trigger files
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Sub { .. } => "sub",
            Self::Mult { .. } => "mult",
            Self::Special => "special",
            Self::Repeating { .. } => "repeating",
            Self::Vending { .. } => "v",
        }
    }
}

fn is_stop(token: &Token) -> bool {
    STOP_WORDS.contains(&&*token.word)
}

/// Update the first nonzero token within `distance` ahead, halting at stops
fn scan_ahead(tokens: &mut [Token], position: usize, distance: i32, update: impl Fn(f32) -> f32) {
    let Ok(distance) = usize::try_from(distance) else {
        return;
    };

    for offset in 1..=distance {
        let Some(token) = tokens.get_mut(position + offset) else {
            break;
        };
        if is_stop(token) {
            break;
        }
        if token.sentiment != 0.0 {
            token.sentiment = update(token.sentiment);
            break;
        }
    }
}

fn apply_special(tokens: &mut [Token], position: usize) {
    let run: String = tokens[position..]
        .iter()
        .map(|t| &*t.word)
        .take_while(|w| *w == "!" || *w == "?")
        .collect();

    if !mixed_punctuation().is_match(&run).unwrap_or(false) {
        return;
    }

    let run_len = run.chars().count();
    tokens[position].sentiment = SPECIAL_SENTIMENT;
    for token in &mut tokens[position + 1..position + run_len] {
        *token = Token::null();
    }
}

fn apply_repeating(
    tokens: &mut [Token],
    position: usize,
    amount: f32,
    literal: &str,
    threshold: usize,
) {
    let count = tokens[position..]
        .iter()
        .take_while(|t| &*t.word == literal)
        .count();

    if count == 0 || count < threshold {
        return;
    }

    tokens[position].sentiment = amount;
    for token in &mut tokens[position + 1..position + count] {
        *token = Token::null();
    }
}

fn vend_ahead(tokens: &mut [Token], position: usize, amount: f32, distance: usize, phrase: &[Arc<str>]) {
    let last = position + distance;
    if last >= tokens.len() {
        return;
    }

    let matches = (1..=distance).all(|offset| tokens[position + offset].word == phrase[offset - 1]);
    if !matches {
        return;
    }

    for token in &mut tokens[position..last] {
        token.sentiment = 0.0;
    }
    tokens[last].sentiment = amount;
}

fn vend_behind(tokens: &mut [Token], position: usize, amount: f32, distance: usize, phrase: &[Arc<str>]) {
    if distance > position {
        return;
    }

    let matches = (1..=distance).all(|offset| tokens[position - offset].word == phrase[offset - 1]);
    if !matches {
        return;
    }

    for token in &mut tokens[position - distance..position] {
        token.sentiment = 0.0;
    }
    tokens[position].sentiment = amount;
}
