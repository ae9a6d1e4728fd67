//! Comment and sentence tokenization
//!
//! A comment is lower-cased, sanitized (links replaced, abbreviations
//! expanded), split into sentences at terminators and line breaks, and each
//! sentence is split into word and mark tokens.

pub mod marks;

use crate::intern;
use crate::settings::{abbreviations, Settings};
use crate::token::{Comment, Identifier, Sentence, Token};
use fancy_regex::Regex;
use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Replacement for links when link removal is enabled
pub const LINK_MARKER: &str = "LINK";

/// Replacement for abbreviations missing from the dictionary
pub const UNKNOWN_ABBREVIATION: &str = "ERROR";

const MAX_EXPANSION_ROUNDS: usize = 256;

fn line_break() -> &'static regex::Regex {
    static LINE_BREAK: OnceLock<regex::Regex> = OnceLock::new();
    LINE_BREAK.get_or_init(|| regex::Regex::new(r"\r?\n").expect("line break pattern is valid"))
}

/// Turns raw text into [`Comment`]s and [`Sentence`]s
#[derive(Debug)]
pub struct Tokenizer {
    settings: Arc<Settings>,
    comment_ids: AtomicU64,
}

impl Tokenizer {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            comment_ids: AtomicU64::new(1),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lower-case, sanitize, split into sentences and tokenize each
    pub fn tokenize_comment(&self, text: &str) -> Comment {
        let id = self.comment_ids.fetch_add(1, Ordering::Relaxed);
        let sanitized = self.sanitize(&text.to_lowercase());

        let sentences = self
            .split_comment(&sanitized)
            .iter()
            .enumerate()
            .map(|(index, sentence)| self.tokenize_sentence(sentence, index as u64, false))
            .collect();

        Comment::new(sentences, Identifier::comment(id, text))
    }

    /// Tokenize one sentence
    ///
    /// With `standalone` the text is lower-cased and sanitized first; without
    /// it the text is assumed to come out of [`Tokenizer::split_comment`].
    pub fn tokenize_sentence(&self, text: &str, id: u64, standalone: bool) -> Sentence {
        let prepared: Cow<'_, str> = if standalone {
            Cow::Owned(self.sanitize(&text.to_lowercase()))
        } else {
            Cow::Borrowed(text)
        };

        let spaced = marks::add_whitespaces(&self.settings, &prepared);
        let tokens = split_words(&spaced)
            .map(|word| Token::new(intern::intern(word)))
            .collect();

        Sentence::new(tokens, Identifier::sentence(id, text))
    }

    /// Link removal and abbreviation expansion, each when enabled
    pub fn sanitize(&self, text: &str) -> String {
        let mut sanitized = if self.settings.remove_links() {
            self.remove_links(text)
        } else {
            text.to_string()
        };

        if self.settings.abbreviation_expansion() {
            sanitized = self.expand_abbreviations(&sanitized);
        }

        sanitized
    }

    /// Replace every link with [`LINK_MARKER`]
    pub fn remove_links(&self, text: &str) -> String {
        replace_matches(self.settings.find_links(), text, LINK_MARKER)
    }

    /// Expand abbreviations until the finder no longer matches
    ///
    /// Every occurrence of a match is replaced at once. A match without a
    /// dictionary entry becomes [`UNKNOWN_ABBREVIATION`].
    pub fn expand_abbreviations(&self, text: &str) -> String {
        let finder = self.settings.abbreviation_finder();
        let mut expanded = text.to_string();

        for _ in 0..MAX_EXPANSION_ROUNDS {
            let found = match first_match(finder, &expanded) {
                Some((start, end)) => expanded[start..end].trim().to_string(),
                None => return expanded,
            };
            if found.is_empty() {
                return expanded;
            }

            let key = abbreviations::lookup_key(&found);
            let replacement = match self.settings.expansion(&key) {
                Some(long) => long,
                None => {
                    log::warn!(
                        "No expansion for abbreviation '{found}' (key '{key}'), replacing with {UNKNOWN_ABBREVIATION}"
                    );
                    UNKNOWN_ABBREVIATION
                }
            };

            expanded = expanded.replace(&found, replacement);
        }

        log::warn!("Abbreviation expansion gave up after {MAX_EXPANSION_ROUNDS} rounds on '{text}'");
        expanded
    }

    /// Split sanitized text into sentence strings
    ///
    /// Every line break starts a new sentence and survives as its own token.
    /// Within a line, a sentence ends after each terminator match.
    pub fn split_comment(&self, text: &str) -> Vec<String> {
        let normalized = line_break().replace_all(text, " \n ");
        let terminator = self.settings.sentence_end_finder();
        let mut sentences = Vec::new();

        for segment in line_segments(&normalized) {
            let mut remaining = segment;
            while let Some((start, end)) = first_match(terminator, remaining) {
                if end == start {
                    break;
                }
                sentences.push(remaining[..end].to_string());
                remaining = &remaining[end..];
            }
            if !remaining.is_empty() {
                sentences.push(remaining.to_string());
            }
        }

        if self.settings.abbreviation_expansion() {
            let finder = self.settings.abbreviation_finder();
            for sentence in &mut sentences {
                let padded = format!("{sentence} ");
                if first_match(finder, &padded).is_some() {
                    *sentence = self.expand_abbreviations(&padded).trim().to_string();
                }
            }
        }

        sentences
    }
}

/// Segments that each start at a line break, except the first
fn line_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (index, _) in text.match_indices('\n') {
        if index > start {
            segments.push(&text[start..index]);
        }
        start = index;
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }

    segments
}

/// Split on spaces and tabs; line breaks stay as tokens
fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ' ' || (c.is_whitespace() && c != '\n'))
        .filter(|word| !word.is_empty())
}

fn first_match(pattern: &Regex, text: &str) -> Option<(usize, usize)> {
    match pattern.find(text) {
        Ok(found) => found.map(|m| (m.start(), m.end())),
        Err(e) => {
            log::warn!("Pattern search aborted: {e}");
            None
        }
    }
}

fn replace_matches(pattern: &Regex, text: &str, replacement: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    let mut last = 0;

    for found in pattern.find_iter(text) {
        match found {
            Ok(found) if found.end() > found.start() => {
                replaced.push_str(&text[last..found.start()]);
                replaced.push_str(replacement);
                last = found.end();
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("Pattern replacement aborted: {e}");
                break;
            }
        }
    }

    replaced.push_str(&text[last..]);
    replaced
}
