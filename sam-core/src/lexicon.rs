//! Word scores and trigger words
//!
//! Both tables are built once and then only read, so they can be shared
//! between threads behind an `Arc`.

use crate::error::{Result, SamError};
use crate::intern;
use crate::modifier::Modifier;
use csv::StringRecord;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Base sentiment per word
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<Arc<str>, i32>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word; an existing entry wins and the new one is dropped
    pub fn insert(&mut self, word: &str, score: i32) -> bool {
        let word = intern::intern(&word.trim().to_lowercase());
        if let Some(existing) = self.entries.get(&word) {
            log::warn!("Duplicate lexicon word '{word}' ({score}), keeping {existing}");
            return false;
        }
        self.entries.insert(word, score);
        true
    }

    pub fn get(&self, word: &str) -> Option<i32> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read headerless `word,score` rows
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self> {
        let mut rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut lexicon = Self::new();
        for record in rows.records() {
            let record = record?;
            let line = line_of(&record);

            let (Some(word), Some(score)) = (record.get(0), record.get(1)) else {
                return Err(lexicon_error(source, line, "expected 'word,score'"));
            };
            if word.is_empty() {
                return Err(lexicon_error(source, line, "empty word"));
            }
            let score: i32 = score
                .parse()
                .map_err(|_| lexicon_error(source, line, format!("invalid score '{score}'")))?;

            lexicon.insert(word, score);
        }

        log::info!("Loaded {} lexicon words from {}", lexicon.len(), source.display());
        Ok(lexicon)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_reader(open(path)?, path)
    }
}

impl<'a> FromIterator<(&'a str, i32)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (&'a str, i32)>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        for (word, score) in iter {
            lexicon.insert(word, score);
        }
        lexicon
    }
}

/// Modifiers per trigger word, in registration order
#[derive(Debug, Clone, Default)]
pub struct TriggerLexicon {
    entries: HashMap<Arc<str>, SmallVec<[Modifier; 2]>>,
}

impl TriggerLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a modifier for `word`; an identical registration is dropped
    pub fn register(&mut self, word: &str, modifier: Modifier) -> bool {
        let word = intern::intern(&word.trim().to_lowercase());
        let modifiers = self.entries.entry(word).or_default();
        if modifiers.contains(&modifier) {
            log::warn!("Duplicate {} modifier for trigger ignored", modifier.kind());
            return false;
        }
        modifiers.push(modifier);
        true
    }

    pub fn get(&self, word: &str) -> Option<&[Modifier]> {
        self.entries.get(word).map(|m| m.as_slice())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of trigger words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total modifiers across all words
    pub fn modifier_count(&self) -> usize {
        self.entries.values().map(|m| m.len()).sum()
    }

    /// Read `word,kind,lookahead,mod_value,extra` rows after a header
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self> {
        let mut rows = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut triggers = Self::new();
        for record in rows.records() {
            let record = record?;
            if let Some((word, modifier)) = parse_trigger(&record, source)? {
                triggers.register(&word, modifier);
            }
        }

        log::info!(
            "Loaded {} modifiers for {} trigger words from {}",
            triggers.modifier_count(),
            triggers.len(),
            source.display()
        );
        Ok(triggers)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_reader(open(path)?, path)
    }
}

fn parse_trigger(record: &StringRecord, source: &Path) -> Result<Option<(String, Modifier)>> {
    let line = line_of(record);
    let field = |index: usize| record.get(index).unwrap_or("");

    let word = field(0).to_lowercase();
    if word.is_empty() {
        return Err(lexicon_error(source, line, "empty trigger word"));
    }
    let kind = field(1).to_lowercase();

    let distance: i32 = parse_or_zero(field(2))
        .map_err(|_| lexicon_error(source, line, format!("invalid lookahead '{}'", field(2))))?;
    let amount: f32 = parse_or_zero(&field(3).replace(',', "."))
        .map_err(|_| lexicon_error(source, line, format!("invalid mod value '{}'", field(3))))?;
    let extra = field(4);

    let modifier = match kind.as_str() {
        "mult" => Modifier::Mult { amount, distance },
        "neg" => Modifier::Mult {
            amount: -1.0,
            distance,
        },
        "add" => Modifier::Add { amount, distance },
        "sub" => Modifier::Sub { amount, distance },
        "special" => Modifier::Special,
        "repeating" => {
            let threshold: usize = extra.parse().map_err(|_| {
                lexicon_error(source, line, format!("invalid repeat threshold '{extra}'"))
            })?;
            Modifier::Repeating {
                amount,
                distance,
                literal: intern::intern(&word),
                threshold,
            }
        }
        "v" | "vending" => {
            let phrase = extra
                .split('|')
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .map(|w| intern::intern(&w))
                .collect();
            Modifier::vending(amount, distance, phrase)
                .map_err(|e| lexicon_error(source, line, e.to_string()))?
        }
        other => {
            log::warn!(
                "Unknown modifier kind '{other}' for '{word}' at {}:{line}, row skipped",
                source.display()
            );
            return Ok(None);
        }
    };

    Ok(Some((word, modifier)))
}

fn parse_or_zero<T: std::str::FromStr + Default>(value: &str) -> std::result::Result<T, T::Err> {
    if value.is_empty() {
        Ok(T::default())
    } else {
        value.parse()
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn lexicon_error(source: &Path, line: u64, reason: impl Into<String>) -> SamError {
    SamError::LexiconError {
        path: PathBuf::from(source),
        line,
        reason: reason.into(),
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        SamError::ConfigurationError(format!("Failed to read file '{}': {}", path.display(), e))
    })
}
