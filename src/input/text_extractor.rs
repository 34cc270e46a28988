//! Text extraction from document bytes

use crate::config::RuntimeEnv;
use crate::error::{Result, ResumeParserError};
use crate::input::mime::MimeType;
use log::{debug, warn};
use std::time::Instant;

pub const PDF_PLACEHOLDER_TEXT: &str = "Mock PDF content for testing purposes";
pub const DOCX_PLACEHOLDER_TEXT: &str = "Mock DOCX content for testing purposes";

/// Decoding engines for the binary document formats, injected so that the
/// "engine unavailable" configuration is testable rather than an
/// environment-detection side effect.
pub trait DocumentDecoders {
    fn decode_pdf(&self, bytes: &[u8]) -> Result<String>;
    fn decode_docx(&self, bytes: &[u8]) -> Result<String>;
}

/// Production decoders backed by pdf-extract and docx-rs.
pub struct DefaultDecoders;

impl DocumentDecoders for DefaultDecoders {
    fn decode_pdf(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ResumeParserError::Extraction(format!("PDF decoding failed: {}", e)))?;
        if text.trim().is_empty() {
            return Err(ResumeParserError::Extraction(
                "Failed to extract text from PDF".to_string(),
            ));
        }
        Ok(text)
    }

    fn decode_docx(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| ResumeParserError::Extraction(format!("DOCX decoding failed: {:?}", e)))?;

        let mut text = String::new();
        for child in docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
                for para_child in paragraph.children {
                    if let docx_rs::ParagraphChild::Run(run) = para_child {
                        for run_child in run.children {
                            if let docx_rs::RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                text.push('\n');
            }
        }
        Ok(text)
    }
}

/// Stand-in for a runtime where no decoding engines are present. Every
/// decode fails, which exercises the placeholder branch in development.
pub struct UnavailableDecoders;

impl DocumentDecoders for UnavailableDecoders {
    fn decode_pdf(&self, _bytes: &[u8]) -> Result<String> {
        Err(ResumeParserError::Extraction(
            "PDF decoder not available".to_string(),
        ))
    }

    fn decode_docx(&self, _bytes: &[u8]) -> Result<String> {
        Err(ResumeParserError::Extraction(
            "DOCX decoder not available".to_string(),
        ))
    }
}

/// Converts raw document bytes plus a declared MIME type into plain text.
///
/// In development a decoder failure degrades to a fixed placeholder string
/// so the rest of the pipeline stays exercisable; in production it is a
/// hard error.
pub struct TextExtractor<D: DocumentDecoders> {
    decoders: D,
    env: RuntimeEnv,
}

impl<D: DocumentDecoders> TextExtractor<D> {
    pub fn new(decoders: D, env: RuntimeEnv) -> Self {
        Self { decoders, env }
    }

    pub fn extract(&self, bytes: &[u8], mime: MimeType) -> Result<String> {
        let started = Instant::now();

        let text = match mime {
            MimeType::Pdf => self.decode_or_placeholder(
                self.decoders.decode_pdf(bytes),
                PDF_PLACEHOLDER_TEXT,
                "Failed to parse PDF file. The file may be corrupted or password-protected.",
            )?,
            MimeType::Docx => self.decode_or_placeholder(
                self.decoders.decode_docx(bytes),
                DOCX_PLACEHOLDER_TEXT,
                "Failed to parse DOCX file. The file may be corrupted.",
            )?,
            MimeType::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        };

        debug!(
            "Extracted {} characters from {} in {:?}",
            text.len(),
            mime.as_str(),
            started.elapsed()
        );
        Ok(text)
    }

    fn decode_or_placeholder(
        &self,
        decoded: Result<String>,
        placeholder: &str,
        production_message: &str,
    ) -> Result<String> {
        match decoded {
            Ok(text) => Ok(text),
            Err(e) => {
                if self.env.is_production() {
                    Err(ResumeParserError::Extraction(production_message.to_string()))
                } else {
                    warn!("Decoder failed, substituting placeholder text: {}", e);
                    Ok(placeholder.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        let extractor = TextExtractor::new(UnavailableDecoders, RuntimeEnv::Production);
        let text = extractor
            .extract(b"John Doe\nSoftware Engineer", MimeType::PlainText)
            .unwrap();
        assert_eq!(text, "John Doe\nSoftware Engineer");
    }

    #[test]
    fn test_missing_pdf_decoder_uses_placeholder_in_development() {
        let extractor = TextExtractor::new(UnavailableDecoders, RuntimeEnv::Development);
        let text = extractor.extract(b"%PDF-1.4", MimeType::Pdf).unwrap();
        assert_eq!(text, PDF_PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_missing_docx_decoder_uses_placeholder_in_development() {
        let extractor = TextExtractor::new(UnavailableDecoders, RuntimeEnv::Development);
        let text = extractor.extract(b"PK", MimeType::Docx).unwrap();
        assert_eq!(text, DOCX_PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_decoder_failure_is_hard_error_in_production() {
        let extractor = TextExtractor::new(UnavailableDecoders, RuntimeEnv::Production);
        let err = extractor.extract(b"%PDF-1.4", MimeType::Pdf).unwrap_err();
        assert!(matches!(err, ResumeParserError::Extraction(_)));
        assert!(err.to_string().contains("corrupted or password-protected"));
    }

    #[test]
    fn test_corrupt_pdf_rejected_by_real_decoder() {
        let extractor = TextExtractor::new(DefaultDecoders, RuntimeEnv::Production);
        let err = extractor.extract(b"not a pdf at all", MimeType::Pdf).unwrap_err();
        assert!(matches!(err, ResumeParserError::Extraction(_)));
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let extractor = TextExtractor::new(UnavailableDecoders, RuntimeEnv::Production);
        let text = extractor
            .extract(&[0x4a, 0x6f, 0xff, 0x6e], MimeType::PlainText)
            .unwrap();
        assert!(text.contains('\u{FFFD}'));
    }
}
