//! Split command implementation

use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sam_core::dataset::{self, LabeledSample, DEFAULT_TEST_FRACTION};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Labelled CSV file (`rating,text`)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Training set output
    #[arg(long, value_name = "FILE")]
    pub train: PathBuf,

    /// Test set output
    #[arg(long, value_name = "FILE")]
    pub test: PathBuf,

    /// Share of rows written to the test set
    #[arg(long, default_value_t = DEFAULT_TEST_FRACTION)]
    pub test_fraction: f64,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Treat the first row as data
    #[arg(long)]
    pub no_header: bool,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        let samples = FileReader::read_labeled(&self.input, !self.no_header)?;
        let total = samples.len();

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (train, test) = dataset::split(samples, self.test_fraction, &mut rng)?;

        write_samples(&self.train, &train)?;
        write_samples(&self.test, &test)?;

        println!("✓ Split {total} rows");
        println!("  Training: {} -> {}", train.len(), self.train.display());
        println!("  Test:     {} -> {}", test.len(), self.test.display());
        Ok(())
    }
}

fn write_samples(path: &Path, samples: &[LabeledSample]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    dataset::write_labeled(BufWriter::new(file), samples)
        .with_context(|| format!("Failed to write {}", path.display()))
}
