//! Work experience extraction

use crate::parsing::model::{Description, Extracted, ExperienceEntry};
use crate::parsing::sections::{date_range, entry_blocks, find_section, split_affiliation};

const SECTION_HEADERS: &[&str] = &[
    "EXPERIENCE",
    "WORK EXPERIENCE",
    "EMPLOYMENT",
    "PROFESSIONAL EXPERIENCE",
];

/// Parse per-job blocks out of the experience section. If the section is
/// absent or yields zero jobs, returns the fixed two-entry fallback rather
/// than an empty list.
pub fn extract_experience(text: &str) -> Extracted<Vec<ExperienceEntry>> {
    let mut experiences = Vec::new();

    if let Some(section) = find_section(text, SECTION_HEADERS) {
        for block in entry_blocks(&section) {
            if let Some(entry) = parse_job_block(&block) {
                experiences.push(entry);
            }
        }
    }

    if experiences.is_empty() {
        Extracted::Fallback(fallback_experience())
    } else {
        Extracted::Matched(experiences)
    }
}

/// Line 1 is the title, line 2 the company (optionally with a location),
/// remaining lines the description. Dates are matched anywhere in the block.
fn parse_job_block(block: &str) -> Option<ExperienceEntry> {
    let lines: Vec<&str> = block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return None;
    }

    let title = lines[0].trim().to_string();
    let (company, location) = split_affiliation(lines[1]);
    let (start_date, end_date) = match date_range(block) {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    };

    Some(ExperienceEntry {
        title,
        company,
        location,
        start_date,
        end_date,
        description: parse_description(&lines[2..]),
    })
}

/// Bullet list when any remaining line carries a bullet marker (bullet
/// lines only, markers stripped), otherwise one joined paragraph.
fn parse_description(lines: &[&str]) -> Description {
    let is_bullet = |line: &str| {
        let trimmed = line.trim();
        trimmed.starts_with('-') || trimmed.starts_with('\u{2022}')
    };

    if lines.iter().any(|line| is_bullet(line)) {
        let bullets = lines
            .iter()
            .filter(|line| is_bullet(line))
            .map(|line| {
                line.trim()
                    .trim_start_matches(['-', '\u{2022}'])
                    .trim_start()
                    .to_string()
            })
            .collect();
        Description::Bullets(bullets)
    } else {
        Description::Paragraph(
            lines
                .iter()
                .map(|line| line.trim())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

fn fallback_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior Frontend Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            location: Some("San Francisco, CA".to_string()),
            start_date: Some("January 2020".to_string()),
            end_date: Some("Present".to_string()),
            description: Description::Bullets(vec![
                "Led development of the company's main product dashboard using React and TypeScript".to_string(),
                "Improved application performance by 40% through code optimization and lazy loading".to_string(),
                "Mentored junior developers and conducted code reviews".to_string(),
            ]),
        },
        ExperienceEntry {
            title: "Frontend Developer".to_string(),
            company: "WebSolutions".to_string(),
            location: Some("San Francisco, CA".to_string()),
            start_date: Some("March 2018".to_string()),
            end_date: Some("December 2019".to_string()),
            description: Description::Bullets(vec![
                "Developed and maintained client websites using React and Redux".to_string(),
                "Implemented responsive designs ensuring cross-browser compatibility".to_string(),
                "Collaborated with UX designers to create intuitive user interfaces".to_string(),
            ]),
        },
    ]
}
