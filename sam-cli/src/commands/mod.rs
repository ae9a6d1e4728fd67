//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use sam_core::{
    BaselineClassifier, Evaluator, Lexicon, RandomClassifier, RuleBasedClassifier, Settings,
    TriggerLexicon, UnmatchedWords,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod compare;
pub mod evaluate;
pub mod generate_config;
pub mod split;
pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score comments and write one result per comment
    Evaluate(evaluate::EvaluateArgs),

    /// Score labelled comments and print a confusion matrix
    Compare(compare::CompareArgs),

    /// Show how comments are split into sentences and tokens
    Tokenize(tokenize::TokenizeArgs),

    /// Check settings, lexicon and trigger files
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Shuffle labelled data into training and test files
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available classifiers
    Classifiers,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Evaluate(args) => args.execute(),
            Commands::Compare(args) => args.execute(),
            Commands::Tokenize(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Split(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Classifiers => {
                println!("Available classifiers:");
                println!("  rule-based - Lexicon scores adjusted by trigger words (default)");
                println!("  baseline   - Always neutral");
                println!("  random     - Uniform pick of negative, neutral or positive");
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text     - One '(Label,score) - comment' line per comment");
                println!("  json     - JSON array of records");
                println!("  markdown - Numbered markdown list with a total");
            }
        }
    }
}

/// Supported classifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ClassifierKind {
    /// Lexicon lookup plus trigger modifiers
    RuleBased,
    /// Always neutral
    Baseline,
    /// Random labels
    Random,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per record
    Text,
    /// JSON array of records
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process.
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Classifier selection shared by `evaluate` and `compare`
#[derive(Debug, Clone, Default, Args)]
pub struct ClassifierArgs {
    /// Classifier to use (default: rule-based)
    #[arg(long, value_enum)]
    pub classifier: Option<ClassifierKind>,

    /// Tokenizer settings file (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Lexicon CSV (`word,score`)
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Trigger lexicon CSV
    #[arg(long, value_name = "FILE")]
    pub triggers: Option<PathBuf>,

    /// Seed for the random classifier
    #[arg(long)]
    pub seed: Option<u64>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// A ready evaluator and its unmatched-word counter, if any
pub struct LoadedClassifier {
    pub evaluator: Arc<dyn Evaluator>,
    pub unmatched: Option<Arc<UnmatchedWords>>,
}

impl ClassifierArgs {
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Flag value, then config value, then `rule-based`
    pub fn kind(&self, config: &CliConfig) -> Result<ClassifierKind> {
        match self.classifier {
            Some(kind) => Ok(kind),
            None => CliConfig::parse_value("classifier", &config.processing.classifier),
        }
    }

    /// Build the selected classifier
    ///
    /// `track_unmatched` forces unmatched-word counting on for the rule-based
    /// classifier.
    pub fn build(&self, config: &CliConfig, track_unmatched: bool) -> Result<LoadedClassifier> {
        let kind = self.kind(config)?;
        log::info!("Using classifier: {kind:?}");

        let evaluator: Arc<dyn Evaluator> = match kind {
            ClassifierKind::Baseline => Arc::new(BaselineClassifier),
            ClassifierKind::Random => Arc::new(match self.seed {
                Some(seed) => RandomClassifier::with_seed(seed),
                None => RandomClassifier::new(),
            }),
            ClassifierKind::RuleBased => {
                let classifier = self.build_rule_based(config, track_unmatched)?;
                let unmatched = classifier.unmatched_words().cloned();
                return Ok(LoadedClassifier {
                    evaluator: Arc::new(classifier),
                    unmatched,
                });
            }
        };

        Ok(LoadedClassifier {
            evaluator,
            unmatched: None,
        })
    }

    fn build_rule_based(&self, config: &CliConfig, track_unmatched: bool) -> Result<RuleBasedClassifier> {
        let lexicon_path = pick(&self.lexicon, &config.processing.lexicon)
            .ok_or_else(|| CliError::MissingInput("--lexicon is required for rule-based".into()))?;
        let triggers_path = pick(&self.triggers, &config.processing.triggers)
            .ok_or_else(|| CliError::MissingInput("--triggers is required for rule-based".into()))?;

        let mut settings = load_settings(pick(&self.settings, &config.processing.settings))?;
        if track_unmatched && !settings.write_non_match_tokens() {
            let mut settings_config = settings.config().clone();
            settings_config.write_non_match_tokens = true;
            settings = Settings::from_config(settings_config)?;
        }

        let lexicon = Lexicon::from_file(lexicon_path)?;
        let triggers = TriggerLexicon::from_file(triggers_path)?;
        log::info!(
            "Loaded {} lexicon words and {} trigger words",
            lexicon.len(),
            triggers.len()
        );

        Ok(RuleBasedClassifier::new(
            Arc::new(settings),
            Arc::new(lexicon),
            Arc::new(triggers),
        ))
    }
}

fn pick<'a>(flag: &'a Option<PathBuf>, configured: &'a Option<PathBuf>) -> Option<&'a Path> {
    flag.as_deref().or(configured.as_deref())
}

/// Settings from `path`, defaults otherwise
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

/// Resolve the output format from the flag or the config
pub fn output_format(flag: Option<OutputFormat>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => CliConfig::parse_value("default_format", &config.output.default_format),
    }
}
