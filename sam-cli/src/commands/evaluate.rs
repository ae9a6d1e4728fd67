//! Evaluate command implementation

use super::{init_logging, output_format, ClassifierArgs, OutputFormat};
use crate::input::{resolve_patterns, FileReader, InputFormat};
use crate::output::create_formatter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use sam_core::dataset::DEFAULT_TEXT_COLUMN;
use sam_core::pipeline;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Input comment files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Layout of the input files
    #[arg(long, value_enum, default_value_t = InputFormat::Csv)]
    pub input_format: InputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Zero-based column holding the comment text
    #[arg(long, default_value_t = DEFAULT_TEXT_COLUMN)]
    pub text_column: usize,

    /// Treat the first row as data
    #[arg(long)]
    pub no_header: bool,

    /// Evaluate on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads (default: one per CPU)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Write `count,word` lines for words missing from the lexicon
    #[arg(long, value_name = "FILE")]
    pub unmatched: Option<PathBuf>,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting evaluation");
        log::debug!("Arguments: {:?}", self);

        let config = self.classifier.load_config()?;
        let format = output_format(self.format, &config)?;
        let threaded = !self.sequential && config.processing.threaded;
        let threads = self.threads.unwrap_or(config.performance.worker_threads);

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to evaluate", files.len());

        let loaded = self.classifier.build(&config, self.unmatched.is_some())?;
        let evaluator = loaded.evaluator.as_ref();

        let inputs = FileReader::read_comment_files(
            &files,
            self.input_format,
            self.text_column,
            !self.no_header,
        )?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let mut formatter =
            create_formatter(format, self.output.as_deref(), config.output.pretty_json)?;

        let mut total = 0;
        for input in &inputs {
            let records = if threaded {
                pipeline::evaluate_parallel(evaluator, &input.comments, threads)?
            } else {
                pipeline::evaluate_sequential(evaluator, &input.comments)
            };

            for record in &records {
                formatter.format_record(record)?;
            }
            total += records.len();

            let name = input
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown");
            progress.file_completed(name, records.len());
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Evaluated {total} comment(s) with {}", evaluator.name());

        if let Some(path) = &self.unmatched {
            match &loaded.unmatched {
                Some(unmatched) => {
                    let file = File::create(path).with_context(|| {
                        format!("Failed to create unmatched words file: {}", path.display())
                    })?;
                    unmatched
                        .write_to(BufWriter::new(file))
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("Wrote {} unmatched word(s) to {}", unmatched.len(), path.display());
                }
                None => log::warn!(
                    "--unmatched is ignored by the {} classifier",
                    evaluator.name()
                ),
            }
        }

        Ok(())
    }
}
