//! Compare command implementation

use super::{init_logging, ClassifierArgs};
use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use sam_core::{pipeline, ConfusionMatrix};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Labelled CSV file (`rating,text`)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Write one hit/miss line per comment
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Treat the first row as data
    #[arg(long)]
    pub no_header: bool,

    /// Leave the neutral row and column out of the matrix
    #[arg(long)]
    pub no_neutral: bool,

    /// Evaluate on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads (default: one per CPU)
    #[arg(short, long)]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = self.classifier.load_config()?;
        let loaded = self.classifier.build(&config, false)?;
        let evaluator = loaded.evaluator.as_ref();

        let samples = FileReader::read_labeled(&self.input, !self.no_header)?;
        log::info!("Comparing {} labelled comment(s)", samples.len());

        let threads = self.threads.unwrap_or(config.performance.worker_threads);
        let comparisons = if self.sequential || !config.processing.threaded {
            pipeline::compare(evaluator, &samples)
        } else {
            pipeline::compare_parallel(evaluator, &samples, threads)?
        };

        let matrix = ConfusionMatrix::from_comparisons(&comparisons);
        println!("Classifier: {}", evaluator.name());
        print!("{}", matrix.render(!self.no_neutral));
        println!(
            "Accuracy: {:.2}% ({}/{})",
            matrix.accuracy(),
            matrix.hits(),
            matrix.total()
        );

        if let Some(path) = &self.output {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            for comparison in &comparisons {
                writeln!(writer, "{comparison}")?;
            }
            writer.flush()?;
            log::info!("Wrote {} comparison(s) to {}", comparisons.len(), path.display());
        }

        Ok(())
    }
}
