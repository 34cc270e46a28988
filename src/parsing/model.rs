//! Structured resume data produced by the section extractors

use serde::{Deserialize, Serialize};

/// A field value together with how it was obtained: a genuine pattern match
/// or the deterministic fallback substituted when nothing matched. Callers
/// that only care about the value use [`Extracted::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum Extracted<T> {
    Matched(T),
    Fallback(T),
}

impl<T> Extracted<T> {
    pub fn value(&self) -> &T {
        match self {
            Extracted::Matched(v) | Extracted::Fallback(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Extracted::Matched(v) | Extracted::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Extracted::Fallback(_))
    }
}

/// Layout hypothesis derived from the section headers present. Captured and
/// reported, but no extractor branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeFormat {
    Standard,
    Chronological,
    Functional,
}

/// Flat contact value object; every field is independently matched or
/// defaulted, so a resume with no name still carries the placeholder name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Extracted<String>,
    pub email: Extracted<String>,
    pub phone: Extracted<String>,
    pub location: Extracted<String>,
    pub linkedin: Extracted<String>,
}

/// Job description text: a bullet list when the source block used bullet
/// markers, otherwise one joined paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Paragraph(String),
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Description,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Aggregate result of one parse. Constructed once per successful parse and
/// immutable afterwards; every parse re-derives it from the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub raw_text: String,
    pub format: ResumeFormat,
    pub contact_info: ContactInfo,
    pub experience: Extracted<Vec<ExperienceEntry>>,
    pub education: Extracted<Vec<EducationEntry>>,
    pub skills: Extracted<Vec<String>>,
    pub certifications: Extracted<Vec<String>>,
    pub ats_score: u8,
    pub word_count: usize,
}
