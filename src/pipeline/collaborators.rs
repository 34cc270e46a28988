//! External persistence collaborators consumed by the orchestrator
//!
//! The parsing core produces the values; storing them is someone else's
//! concern. Both collaborators are best-effort: their failures are logged
//! by the orchestrator and never propagated to the caller.

use crate::parsing::model::ParsedResume;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    Completed,
    Failed,
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStatus::Completed => write!(f, "completed"),
            ParseStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One history row per parse attempt, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsingHistoryRecord {
    pub resume_id: String,
    pub parser_version: String,
    pub status: ParseStatus,
    pub error_message: Option<String>,
    pub processing_ms: u64,
    pub recorded_at: DateTime<Utc>,
}

/// Idempotent upsert of parsed content, keyed by resume identity.
pub trait ParsedContentStore {
    fn persist_parsed_content(
        &self,
        resume_id: &str,
        resume: &ParsedResume,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Fire-and-forget history recording.
pub trait ParsingHistorySink {
    fn record_parsing_history(
        &self,
        record: &ParsingHistoryRecord,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// No-op store for when no database is available.
pub struct NullStore;

impl ParsedContentStore for NullStore {
    async fn persist_parsed_content(
        &self,
        resume_id: &str,
        _resume: &ParsedResume,
    ) -> anyhow::Result<()> {
        debug!("No store configured, skipping persist for {}", resume_id);
        Ok(())
    }
}

/// No-op history sink.
pub struct NullHistory;

impl ParsingHistorySink for NullHistory {
    async fn record_parsing_history(&self, record: &ParsingHistoryRecord) -> anyhow::Result<()> {
        debug!(
            "No history sink configured, dropping record for {} ({})",
            record.resume_id, record.status
        );
        Ok(())
    }
}

/// In-memory history sink, used by tests and local runs.
#[derive(Default)]
pub struct InMemoryHistory {
    records: Mutex<Vec<ParsingHistoryRecord>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ParsingHistoryRecord> {
        self.records.lock().expect("history lock poisoned").clone()
    }
}

impl ParsingHistorySink for InMemoryHistory {
    async fn record_parsing_history(&self, record: &ParsingHistoryRecord) -> anyhow::Result<()> {
        self.records
            .lock()
            .expect("history lock poisoned")
            .push(record.clone());
        Ok(())
    }
}
