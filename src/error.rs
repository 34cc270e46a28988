//! Error handling for the resume parser

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch document: {0}")]
    Fetch(String),

    #[error("Empty file received")]
    EmptyDocument,

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeParserError>;

/// Convert anyhow errors from collaborator glue into our custom error type
impl From<anyhow::Error> for ResumeParserError {
    fn from(err: anyhow::Error) -> Self {
        ResumeParserError::Extraction(err.to_string())
    }
}

/// Network failures while retrieving the source document
impl From<reqwest::Error> for ResumeParserError {
    fn from(err: reqwest::Error) -> Self {
        ResumeParserError::Fetch(err.to_string())
    }
}
