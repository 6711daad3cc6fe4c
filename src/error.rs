//! Error handling for the recruitment assistant

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecruitAssistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, RecruitAssistError>;

impl From<askama::Error> for RecruitAssistError {
    fn from(err: askama::Error) -> Self {
        RecruitAssistError::OutputFormatting(err.to_string())
    }
}
