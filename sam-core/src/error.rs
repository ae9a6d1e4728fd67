use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or running the scoring pipeline
#[derive(Debug, Error)]
pub enum SamError {
    /// Settings loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A configured regular expression failed to compile
    #[error("Invalid pattern '{name}': {reason}")]
    InvalidPattern { name: &'static str, reason: String },

    /// Malformed lexicon or trigger-lexicon row
    #[error("Lexicon error in {}, line {line}: {reason}", path.display())]
    LexiconError {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Modifier construction with inconsistent parameters
    #[error("Invalid modifier: {0}")]
    InvalidModifier(String),

    /// Malformed dataset row
    #[error("Dataset error, line {line}: {reason}")]
    DatasetError { line: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Thread pool construction failed
    #[error("Parallel execution failed: {0}")]
    ParallelError(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, SamError>;
