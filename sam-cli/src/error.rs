//! Error handling for the CLI application

use std::fmt;

/// User-facing CLI errors
#[derive(Debug)]
pub enum CliError {
    /// A required file or option was not given
    MissingInput(String),
    /// Invalid CLI configuration value
    ConfigError(String),
    /// A checked file did not load
    ValidationFailed(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingInput(what) => write!(f, "Missing input: {what}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ValidationFailed(msg) => write!(f, "Validation failed: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display() {
        let error = CliError::MissingInput("--lexicon".to_string());
        assert_eq!(error.to_string(), "Missing input: --lexicon");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown classifier 'svm'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown classifier 'svm'"
        );
    }

    #[test]
    fn test_validation_failed_display() {
        let error = CliError::ValidationFailed("lexicon.csv".to_string());
        assert_eq!(error.to_string(), "Validation failed: lexicon.csv");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::ProcessingError("pool".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "Processing error: pool");
    }
}
