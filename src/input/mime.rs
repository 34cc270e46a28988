//! MIME type classification for uploaded documents

use crate::error::{Result, ResumeParserError};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Pdf,
    Docx,
    PlainText,
}

impl MimeType {
    /// Classify a caller-declared MIME type. Anything outside the three
    /// recognized types is an unsupported format.
    pub fn from_declared(mime: &str) -> Result<Self> {
        match mime {
            "application/pdf" => Ok(MimeType::Pdf),
            DOCX_MIME => Ok(MimeType::Docx),
            "text/plain" => Ok(MimeType::PlainText),
            other => Err(ResumeParserError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Infer from a file extension when the caller did not declare a type.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(MimeType::Pdf),
            "docx" => Ok(MimeType::Docx),
            "txt" => Ok(MimeType::PlainText),
            other => Err(ResumeParserError::UnsupportedFormat(format!(
                "unrecognized extension: .{}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Pdf => "application/pdf",
            MimeType::Docx => DOCX_MIME,
            MimeType::PlainText => "text/plain",
        }
    }
}
