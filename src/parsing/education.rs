//! Education extraction

use crate::parsing::model::{EducationEntry, Extracted};
use crate::parsing::sections::{date_range, entry_blocks, find_section, split_affiliation};

const SECTION_HEADERS: &[&str] = &[
    "EDUCATION",
    "ACADEMIC BACKGROUND",
    "EDUCATIONAL BACKGROUND",
];

/// Same block-splitting strategy as experience: line 1 is the degree,
/// line 2 the institution (optionally with a location). Fallback is one
/// fixed entry.
pub fn extract_education(text: &str) -> Extracted<Vec<EducationEntry>> {
    let mut education = Vec::new();

    if let Some(section) = find_section(text, SECTION_HEADERS) {
        for block in entry_blocks(&section) {
            let lines: Vec<&str> = block
                .lines()
                .filter(|line| !line.trim().is_empty())
                .collect();
            if lines.len() < 2 {
                continue;
            }

            let degree = lines[0].trim().to_string();
            let (institution, location) = split_affiliation(lines[1]);
            let (start_date, end_date) = match date_range(&block) {
                Some((start, end)) => (Some(start), Some(end)),
                None => (None, None),
            };

            education.push(EducationEntry {
                degree,
                institution,
                location,
                start_date,
                end_date,
            });
        }
    }

    if education.is_empty() {
        Extracted::Fallback(fallback_education())
    } else {
        Extracted::Matched(education)
    }
}

fn fallback_education() -> Vec<EducationEntry> {
    vec![EducationEntry {
        degree: "Bachelor of Science in Computer Science".to_string(),
        institution: "University of California, Berkeley".to_string(),
        location: Some("Berkeley, CA".to_string()),
        start_date: Some("September 2014".to_string()),
        end_date: Some("May 2018".to_string()),
    }]
}
