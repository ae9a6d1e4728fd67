//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use sam_core::SettingsConfig;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Write a CLI configuration instead of tokenizer settings
    #[arg(long)]
    pub cli: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let kind = if self.cli { "CLI configuration" } else { "settings" };
        println!("Generating {kind} template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template generated successfully!");
        println!();
        println!("Next steps:");
        if self.cli {
            println!("1. Fill in the lexicon and trigger paths");
            println!("2. Use it for evaluation:");
            println!("   sam evaluate -i comments.csv --config {}", self.output.display());
        } else {
            println!("1. Edit the patterns or add abbreviations");
            println!("2. Validate your settings:");
            println!("   sam validate --settings {}", self.output.display());
            println!("3. Use them for evaluation:");
            println!(
                "   sam evaluate -i comments.csv --settings {} --lexicon lexicon.csv --triggers triggers.csv",
                self.output.display()
            );
        }

        Ok(())
    }

    /// Template content with every default spelled out
    fn generate_template(&self) -> Result<String> {
        if self.cli {
            Ok(format!(
                "# sam CLI configuration\n# Command line flags override these values.\n\n{}",
                CliConfig::default().to_toml_string()?
            ))
        } else {
            let body = SettingsConfig::default()
                .to_toml_string()
                .context("Failed to render default settings")?;
            Ok(format!(
                "# Tokenizer settings\n# Every key is optional; missing keys keep these defaults.\n# Entries under [abbreviations] are merged over the built-in dictionary.\n\n{body}"
            ))
        }
    }
}
