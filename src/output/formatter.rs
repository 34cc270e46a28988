//! Output formatters for parse results

use crate::error::{Result, ResumeParserError};
use crate::parsing::model::{Description, Extracted};
use crate::pipeline::orchestrator::ParseSuccess;
use colored::Colorize;
use std::fmt::Write;

/// Trait for rendering a successful parse.
pub trait OutputFormatter {
    fn format_result(&self, result: &ParseSuccess) -> Result<String>;
}

/// Console formatter with colors and optional raw-text preview.
pub struct ConsoleFormatter {
    pub use_colors: bool,
    pub detailed: bool,
}

/// JSON formatter matching the upload API's response shape.
pub struct JsonFormatter {
    pub pretty: bool,
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &ParseSuccess) -> Result<String> {
        let resume = &result.resume;
        let mut out = String::new();

        let heading = |s: &str| {
            if self.use_colors {
                s.bold().cyan().to_string()
            } else {
                s.to_string()
            }
        };
        let annotate = |field: &Extracted<String>| {
            if field.is_fallback() {
                format!("{} (default)", field.value())
            } else {
                field.value().clone()
            }
        };

        writeln!(out, "{}", heading("Resume Parse Result")).ok();
        writeln!(out, "Resume: {}", result.resume_id).ok();
        writeln!(out, "Format: {:?}", resume.format).ok();
        writeln!(out, "Words:  {}", resume.word_count).ok();
        writeln!(out, "Time:   {}ms", result.processing_ms).ok();

        writeln!(out, "\n{}", heading("ATS Score")).ok();
        writeln!(out, "{}", self.score_badge(resume.ats_score)).ok();

        writeln!(out, "\n{}", heading("Contact")).ok();
        writeln!(out, "Name:     {}", annotate(&resume.contact_info.name)).ok();
        writeln!(out, "Email:    {}", annotate(&resume.contact_info.email)).ok();
        writeln!(out, "Phone:    {}", annotate(&resume.contact_info.phone)).ok();
        writeln!(out, "Location: {}", annotate(&resume.contact_info.location)).ok();
        writeln!(out, "LinkedIn: {}", annotate(&resume.contact_info.linkedin)).ok();

        writeln!(out, "\n{}", heading("Experience")).ok();
        if resume.experience.is_fallback() {
            writeln!(out, "(no experience section found, showing defaults)").ok();
        }
        for entry in resume.experience.value() {
            writeln!(
                out,
                "- {} at {}{}",
                entry.title,
                entry.company,
                entry
                    .location
                    .as_deref()
                    .map(|l| format!(" ({})", l))
                    .unwrap_or_default()
            )
            .ok();
            if let (Some(start), Some(end)) = (&entry.start_date, &entry.end_date) {
                writeln!(out, "  {} - {}", start, end).ok();
            }
            match &entry.description {
                Description::Bullets(bullets) => {
                    for bullet in bullets {
                        writeln!(out, "  * {}", bullet).ok();
                    }
                }
                Description::Paragraph(text) if !text.is_empty() => {
                    writeln!(out, "  {}", text).ok();
                }
                Description::Paragraph(_) => {}
            }
        }

        writeln!(out, "\n{}", heading("Education")).ok();
        for entry in resume.education.value() {
            writeln!(out, "- {}, {}", entry.degree, entry.institution).ok();
        }

        writeln!(out, "\n{}", heading("Skills")).ok();
        writeln!(out, "{}", resume.skills.value().join(", ")).ok();

        if !resume.certifications.value().is_empty() {
            writeln!(out, "\n{}", heading("Certifications")).ok();
            for cert in resume.certifications.value() {
                writeln!(out, "- {}", cert).ok();
            }
        }

        if self.detailed {
            writeln!(out, "\n{}", heading("Raw Text Preview")).ok();
            writeln!(out, "{}", truncate(&resume.raw_text, 300)).ok();
        }

        Ok(out)
    }
}

impl ConsoleFormatter {
    fn score_badge(&self, score: u8) -> String {
        let label = format!("{}/100", score);
        if !self.use_colors {
            return label;
        }
        match score {
            80..=100 => label.green().bold().to_string(),
            60..=79 => label.cyan().bold().to_string(),
            40..=59 => label.yellow().bold().to_string(),
            _ => label.red().bold().to_string(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &ParseSuccess) -> Result<String> {
        // Raw text is persisted alongside the structured result but not
        // returned in the success payload.
        let payload = serde_json::json!({
            "success": true,
            "data": {
                "resumeId": result.resume_id,
                "format": result.resume.format,
                "contactInfo": result.resume.contact_info,
                "experience": result.resume.experience,
                "education": result.resume.education,
                "skills": result.resume.skills,
                "certifications": result.resume.certifications,
                "atsScore": result.resume.ats_score,
                "processingMs": result.processing_ms,
            }
        });

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };
        Ok(rendered)
    }
}

/// Failure shape shared by both formats.
pub fn format_failure(error: &ResumeParserError) -> String {
    serde_json::json!({
        "success": false,
        "error": error.to_string(),
    })
    .to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::extract_structured_data;

    fn sample_success() -> ParseSuccess {
        let text = "EXPERIENCE\n\nSenior Developer\nAcme Corp, Springfield\nJanuary 2020 - Present\n- Built things";
        ParseSuccess {
            resume_id: "r-1".to_string(),
            resume: extract_structured_data(text),
            processing_ms: 3,
        }
    }

    #[test]
    fn test_json_success_shape() {
        let rendered = JsonFormatter { pretty: false }
            .format_result(&sample_success())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["resumeId"], "r-1");
        assert_eq!(value["data"]["experience"]["source"], "matched");
        assert!(value["data"].get("rawText").is_none());
    }

    #[test]
    fn test_json_failure_shape() {
        let rendered = format_failure(&ResumeParserError::EmptyDocument);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Empty file received");
    }

    #[test]
    fn test_console_marks_fallback_fields() {
        let success = ParseSuccess {
            resume_id: "r-2".to_string(),
            resume: extract_structured_data("nothing recognizable"),
            processing_ms: 1,
        };
        let rendered = ConsoleFormatter {
            use_colors: false,
            detailed: false,
        }
        .format_result(&success)
        .unwrap();

        assert!(rendered.contains("John Doe (default)"));
        assert!(rendered.contains("no experience section found"));
    }
}
