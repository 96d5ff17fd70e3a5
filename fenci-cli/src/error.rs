//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or inaccessible
    FileNotFound(String),
    /// Dictionary or stopword source rejected
    InvalidLexicon(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidLexicon(msg) => write!(f, "Invalid lexicon: {msg}"),
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
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("corpus.txt".to_string());
        assert_eq!(error.to_string(), "File not found: corpus.txt");
    }

    #[test]
    fn test_invalid_lexicon_error_display() {
        let error = CliError::InvalidLexicon("entry too long".to_string());
        assert_eq!(error.to_string(), "Invalid lexicon: entry too long");
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("write failed".to_string());
        assert_eq!(error.to_string(), "Processing error: write failed");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("corpus.txt".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("FileNotFound"));
        assert!(debug_str.contains("corpus.txt"));
    }

    #[test]
    fn test_error_with_unicode_path() {
        let error = CliError::FileNotFound("语料/corpus 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: 语料/corpus 文件.txt");
    }
}
