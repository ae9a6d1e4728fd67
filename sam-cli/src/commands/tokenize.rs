//! Tokenize command implementation

use super::{init_logging, load_settings};
use crate::input::FileReader;
use anyhow::Result;
use clap::{ArgGroup, Args};
use sam_core::{Comment, Tokenizer};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["text", "input"])))]
pub struct TokenizeArgs {
    /// Comment text to tokenize (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Text files; every non-empty line is one comment
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Tokenizer settings file (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: TraceFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How tokenized comments are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TraceFormat {
    /// `|tok|tok|[END]` traces, one comment per line
    Text,
    /// JSON array with sentences and tokens
    Json,
}

#[derive(Debug, Serialize)]
struct CommentTrace<'a> {
    comment: &'a str,
    sentences: Vec<SentenceTrace<'a>>,
}

#[derive(Debug, Serialize)]
struct SentenceTrace<'a> {
    text: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> CommentTrace<'a> {
    fn new(raw: &'a str, comment: &'a Comment) -> Self {
        Self {
            comment: raw,
            sentences: comment
                .sentences
                .iter()
                .map(|sentence| SentenceTrace {
                    text: sentence.id.original.as_str(),
                    tokens: sentence.words().collect(),
                })
                .collect(),
        }
    }
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let tokenizer = Tokenizer::new(Arc::new(load_settings(self.settings.as_deref())?));

        let mut texts = self.text.clone();
        for path in &self.input {
            texts.extend(FileReader::read_lines(path)?);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_traces(&tokenizer, &texts, &mut out)?;
        out.flush()?;
        Ok(())
    }

    fn write_traces<W: Write>(&self, tokenizer: &Tokenizer, texts: &[String], out: &mut W) -> Result<()> {
        let comments: Vec<Comment> = texts
            .iter()
            .map(|text| tokenizer.tokenize_comment(text))
            .collect();

        match self.format {
            TraceFormat::Text => {
                for comment in &comments {
                    writeln!(out, "{}", comment.trace())?;
                }
            }
            TraceFormat::Json => {
                let traces: Vec<CommentTrace<'_>> = texts
                    .iter()
                    .zip(&comments)
                    .map(|(raw, comment)| CommentTrace::new(raw, comment))
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &traces)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
