//! Document sources: storage URLs and local files

use crate::error::{Result, ResumeParserError};
use log::info;
use std::path::PathBuf;
use tokio::fs;

/// Where the raw document bytes come from. Uploaded resumes live behind a
/// blob-storage URL; local paths are accepted for CLI use and tests.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Url(String),
    Path(PathBuf),
}

impl DocumentSource {
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            DocumentSource::Url(input.to_string())
        } else {
            DocumentSource::Path(PathBuf::from(input))
        }
    }

    pub async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            DocumentSource::Url(url) => {
                info!("Fetching document from URL: {}", url);
                let response = reqwest::get(url).await?;
                if !response.status().is_success() {
                    return Err(ResumeParserError::Fetch(format!(
                        "Failed to fetch file: {} {}",
                        response.status().as_u16(),
                        response.status().canonical_reason().unwrap_or("")
                    )));
                }
                let bytes = response.bytes().await?;
                Ok(bytes.to_vec())
            }
            DocumentSource::Path(path) => {
                info!("Reading document from file: {}", path.display());
                let bytes = fs::read(path)
                    .await
                    .map_err(|e| ResumeParserError::Fetch(format!(
                        "Failed to read file '{}': {}",
                        path.display(),
                        e
                    )))?;
                Ok(bytes)
            }
        }
    }

    /// File extension of the underlying source, if it has one.
    pub fn extension(&self) -> Option<String> {
        let name = match self {
            DocumentSource::Url(url) => url.rsplit('/').next().unwrap_or(""),
            DocumentSource::Path(path) => return path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|s| s.to_string()),
        };
        let name = name.split('?').next().unwrap_or(name);
        name.rsplit_once('.').map(|(_, ext)| ext.to_string())
    }
}
