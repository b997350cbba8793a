//! Error handling for the resume scanner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScanError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeScanError {
    fn from(err: anyhow::Error) -> Self {
        ResumeScanError::InvalidInput(err.to_string())
    }
}
