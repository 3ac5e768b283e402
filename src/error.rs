//! Error types for the chord recognition engine

use std::fmt;

/// Errors that can occur during chord extraction
///
/// Failures are surfaced whole to the caller: no partial interval list is
/// ever produced alongside an error.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),

    /// Required decode capability is unavailable (unknown container,
    /// codec, or sample format)
    UnsupportedFormat(String),

    /// Processing error during analysis
    ProcessingError(String),

    /// Numerical error (non-finite values, overflow, etc.)
    NumericalError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            AnalysisError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            AnalysisError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
