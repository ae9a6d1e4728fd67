//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::{ArgGroup, Args};
use sam_core::{Lexicon, Settings, TriggerLexicon};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("files").required(true).multiple(true).args(["settings", "lexicon", "triggers"])))]
pub struct ValidateArgs {
    /// Settings file to validate (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Lexicon CSV to validate
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Trigger lexicon CSV to validate
    #[arg(long, value_name = "FILE")]
    pub triggers: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut failures = Vec::new();

        if let Some(path) = &self.settings {
            println!("Validating settings: {}", path.display());
            match Settings::from_file(path) {
                Ok(settings) => {
                    println!("✓ Settings are valid!");
                    println!("  Abbreviations: {}", settings.abbreviation_count());
                    println!("  Abbreviation expansion: {}", settings.abbreviation_expansion());
                    println!("  Link removal: {}", settings.remove_links());
                }
                Err(e) => failures.push(report(path, e)),
            }
        }

        if let Some(path) = &self.lexicon {
            println!("Validating lexicon: {}", path.display());
            match Lexicon::from_file(path) {
                Ok(lexicon) => {
                    println!("✓ Lexicon is valid!");
                    println!("  Words: {}", lexicon.len());
                }
                Err(e) => failures.push(report(path, e)),
            }
        }

        if let Some(path) = &self.triggers {
            println!("Validating triggers: {}", path.display());
            match TriggerLexicon::from_file(path) {
                Ok(triggers) => {
                    println!("✓ Triggers are valid!");
                    println!("  Trigger words: {}", triggers.len());
                    println!("  Modifiers: {}", triggers.modifier_count());
                }
                Err(e) => failures.push(report(path, e)),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(CliError::ValidationFailed(failures.join(", ")).into())
        }
    }
}

fn report(path: &std::path::Path, error: sam_core::SamError) -> String {
    println!("✗ Invalid!");
    println!("  Error: {error}");
    path.display().to_string()
}
