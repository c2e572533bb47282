//! Centralized error types for Marketlens.

use thiserror::Error;

/// Failure of the upstream text generation call.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request to generation provider failed: {0}")]
    Request(String),

    #[error("Generation provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode generation provider response: {0}")]
    Decode(String),

    #[error("Generation provider returned no completions")]
    EmptyCompletion,
}

/// Failure to pull a JSON object out of raw model text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("no JSON found")]
    NoJson,

    #[error("parse failure: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("parse failure: expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl ExtractionError {
    /// True when a candidate span was found but did not yield an object.
    pub fn is_parse_failure(&self) -> bool {
        !matches!(self, Self::NoJson)
    }
}

/// Main error type for report generation.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

impl LensError {
    /// Short failure class used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Provider(_) => "provider",
            Self::Extraction(_) => "extraction",
        }
    }
}

/// Result type for Marketlens operations.
pub type LensResult<T> = Result<T, LensError>;
