//! Parse orchestration
//!
//! Sequences fetch, text extraction, section extraction, and scoring for
//! one document, records timing and outcome, and hands the result to the
//! persistence collaborators. This is the only component aware of
//! wall-clock time and I/O; everything below it is pure.

use crate::error::{Result, ResumeParserError};
use crate::input::mime::MimeType;
use crate::input::source::DocumentSource;
use crate::input::text_extractor::{DocumentDecoders, TextExtractor};
use crate::parsing;
use crate::parsing::model::ParsedResume;
use crate::pipeline::collaborators::{
    ParsedContentStore, ParseStatus, ParsingHistoryRecord, ParsingHistorySink,
};
use chrono::Utc;
use log::{debug, error, info};
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Fixed version string tagging the heuristic rule-set, recorded with every
/// parse attempt for traceability across rule changes.
pub const PARSER_VERSION: &str = "1.0.0";

/// Lifecycle of one parse invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseStage {
    Idle,
    Extracting,
    ExtractingSections,
    Scoring,
    Completed,
    Failed,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseStage::Idle => "idle",
            ParseStage::Extracting => "extracting",
            ParseStage::ExtractingSections => "extracting-sections",
            ParseStage::Scoring => "scoring",
            ParseStage::Completed => "completed",
            ParseStage::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

struct StageTracker<'a> {
    resume_id: &'a str,
    stage: ParseStage,
}

impl<'a> StageTracker<'a> {
    fn new(resume_id: &'a str) -> Self {
        Self {
            resume_id,
            stage: ParseStage::Idle,
        }
    }

    fn advance(&mut self, next: ParseStage) {
        debug!("Parse {}: {} -> {}", self.resume_id, self.stage, next);
        self.stage = next;
    }
}

/// Successful parse payload returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ParseSuccess {
    pub resume_id: String,
    pub resume: ParsedResume,
    pub processing_ms: u64,
}

pub struct ParseOrchestrator<D, S, H>
where
    D: DocumentDecoders,
    S: ParsedContentStore,
    H: ParsingHistorySink,
{
    extractor: TextExtractor<D>,
    store: S,
    history: H,
}

impl<D, S, H> ParseOrchestrator<D, S, H>
where
    D: DocumentDecoders,
    S: ParsedContentStore,
    H: ParsingHistorySink,
{
    pub fn new(extractor: TextExtractor<D>, store: S, history: H) -> Self {
        Self {
            extractor,
            store,
            history,
        }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Parse one document. Fatal conditions (fetch failure, empty payload,
    /// unsupported type, decoder rejection) surface as a single error; the
    /// section extractors themselves never fail. Both collaborator calls
    /// are best-effort and cannot fail the parse.
    pub async fn parse(
        &self,
        resume_id: &str,
        source: &DocumentSource,
        mime: MimeType,
    ) -> Result<ParseSuccess> {
        let started = Instant::now();
        info!("Parsing resume {} ({})", resume_id, mime.as_str());

        match self.run_pipeline(resume_id, source, mime).await {
            Ok(resume) => {
                let processing_ms = started.elapsed().as_millis() as u64;

                if let Err(e) = self.store.persist_parsed_content(resume_id, &resume).await {
                    error!("Failed to persist parsed content for {}: {}", resume_id, e);
                }
                self.record_history(resume_id, ParseStatus::Completed, None, processing_ms)
                    .await;

                info!(
                    "Parsed resume {} in {}ms (ATS score {})",
                    resume_id, processing_ms, resume.ats_score
                );
                Ok(ParseSuccess {
                    resume_id: resume_id.to_string(),
                    resume,
                    processing_ms,
                })
            }
            Err(e) => {
                let processing_ms = started.elapsed().as_millis() as u64;
                error!("Failed to parse resume {}: {}", resume_id, e);
                self.record_history(
                    resume_id,
                    ParseStatus::Failed,
                    Some(e.to_string()),
                    processing_ms,
                )
                .await;
                Err(e)
            }
        }
    }

    async fn run_pipeline(
        &self,
        resume_id: &str,
        source: &DocumentSource,
        mime: MimeType,
    ) -> Result<ParsedResume> {
        let mut tracker = StageTracker::new(resume_id);

        tracker.advance(ParseStage::Extracting);
        let bytes = match source.fetch().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracker.advance(ParseStage::Failed);
                return Err(e);
            }
        };
        if bytes.is_empty() {
            tracker.advance(ParseStage::Failed);
            return Err(ResumeParserError::EmptyDocument);
        }
        let text = match self.extractor.extract(&bytes, mime) {
            Ok(text) => text,
            Err(e) => {
                tracker.advance(ParseStage::Failed);
                return Err(e);
            }
        };

        tracker.advance(ParseStage::ExtractingSections);
        let sections = parsing::extract_sections(&text);

        tracker.advance(ParseStage::Scoring);
        let resume = sections.into_resume(&text);

        tracker.advance(ParseStage::Completed);
        Ok(resume)
    }

    async fn record_history(
        &self,
        resume_id: &str,
        status: ParseStatus,
        error_message: Option<String>,
        processing_ms: u64,
    ) {
        let record = ParsingHistoryRecord {
            resume_id: resume_id.to_string(),
            parser_version: PARSER_VERSION.to_string(),
            status,
            error_message,
            processing_ms,
            recorded_at: Utc::now(),
        };
        if let Err(e) = self.history.record_parsing_history(&record).await {
            error!("Failed to record parsing history for {}: {}", resume_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeEnv;
    use crate::input::text_extractor::UnavailableDecoders;
    use crate::pipeline::collaborators::{InMemoryHistory, NullStore};

    fn orchestrator(
        env: RuntimeEnv,
    ) -> ParseOrchestrator<UnavailableDecoders, NullStore, InMemoryHistory> {
        ParseOrchestrator::new(
            TextExtractor::new(UnavailableDecoders, env),
            NullStore,
            InMemoryHistory::new(),
        )
    }

    #[tokio::test]
    async fn test_failed_fetch_records_failed_history() {
        let orch = orchestrator(RuntimeEnv::Development);
        let source = DocumentSource::parse("tests/fixtures/does-not-exist.txt");

        let result = orch.parse("r-1", &source, MimeType::PlainText).await;
        assert!(matches!(result, Err(ResumeParserError::Fetch(_))));

        let records = orch.history.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, ParseStatus::Failed);
        assert_eq!(records[0].parser_version, PARSER_VERSION);
        assert!(records[0].error_message.is_some());
    }

    #[tokio::test]
    async fn test_pdf_with_unavailable_decoder_succeeds_in_development() {
        let orch = orchestrator(RuntimeEnv::Development);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4 garbage").unwrap();
        let source = DocumentSource::Path(path);

        let success = orch.parse("r-2", &source, MimeType::Pdf).await.unwrap();
        assert_eq!(
            success.resume.raw_text,
            crate::input::text_extractor::PDF_PLACEHOLDER_TEXT
        );
        assert!(success.resume.experience.is_fallback());

        let records = orch.history.records();
        assert_eq!(records[0].status, ParseStatus::Completed);
    }

    #[tokio::test]
    async fn test_pdf_with_unavailable_decoder_fails_in_production() {
        let orch = orchestrator(RuntimeEnv::Production);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4 garbage").unwrap();
        let source = DocumentSource::Path(path);

        let result = orch.parse("r-3", &source, MimeType::Pdf).await;
        assert!(matches!(result, Err(ResumeParserError::Extraction(_))));
        assert_eq!(orch.history.records()[0].status, ParseStatus::Failed);
    }
}
