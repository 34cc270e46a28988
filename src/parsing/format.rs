//! Resume layout classification

use crate::parsing::model::ResumeFormat;

/// Classify the text into a layout hypothesis from the section headers
/// present. Total function; Functional is the default, not an error.
pub fn detect_resume_format(text: &str) -> ResumeFormat {
    let headers: Vec<String> = text
        .split("\n\n")
        .map(|section| {
            section
                .lines()
                .next()
                .unwrap_or("")
                .to_uppercase()
                .trim()
                .to_string()
        })
        .collect();

    let has = |h: &str| headers.iter().any(|header| header == h);

    if has("SUMMARY") || has("OBJECTIVE") {
        ResumeFormat::Standard
    } else if has("WORK EXPERIENCE") || has("EMPLOYMENT") {
        ResumeFormat::Chronological
    } else {
        ResumeFormat::Functional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_header_means_standard() {
        let text = "John Doe\n\nSUMMARY\nExperienced developer\n\nWORK EXPERIENCE\nDeveloper";
        assert_eq!(detect_resume_format(text), ResumeFormat::Standard);
    }

    #[test]
    fn test_work_experience_header_means_chronological() {
        let text = "John Doe\n\nWORK EXPERIENCE\nDeveloper at Acme";
        assert_eq!(detect_resume_format(text), ResumeFormat::Chronological);
    }

    #[test]
    fn test_no_recognized_headers_means_functional() {
        assert_eq!(detect_resume_format("just plain text"), ResumeFormat::Functional);
        assert_eq!(detect_resume_format(""), ResumeFormat::Functional);
    }
}
