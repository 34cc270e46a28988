//! Skills extraction

use crate::parsing::model::Extracted;
use crate::parsing::sections::find_section;
use regex::Regex;

const SECTION_HEADERS: &[&str] = &["SKILLS", "TECHNICAL SKILLS", "COMPETENCIES", "EXPERTISE"];

/// Split the skills section on commas, newlines, bullets, or hyphens. Any
/// token still containing "skills" is dropped so the header itself is not
/// re-captured.
pub fn extract_skills(text: &str) -> Extracted<Vec<String>> {
    if let Some(section) = find_section(text, SECTION_HEADERS) {
        let separators = Regex::new(r"[,\n\u{2022}-]").unwrap();
        let skills: Vec<String> = separators
            .split(&section)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty() && !token.to_uppercase().contains("SKILLS"))
            .collect();
        return Extracted::Matched(skills);
    }

    Extracted::Fallback(fallback_skills())
}

fn fallback_skills() -> Vec<String> {
    [
        "JavaScript",
        "TypeScript",
        "React",
        "Next.js",
        "HTML",
        "CSS",
        "Tailwind CSS",
        "Node.js",
        "Git",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_skills() {
        let skills = extract_skills("SKILLS\nRust, Python, PostgreSQL");

        assert!(!skills.is_fallback());
        assert_eq!(skills.value(), &["Rust", "Python", "PostgreSQL"]);
    }

    #[test]
    fn test_bulleted_skills() {
        let skills = extract_skills("TECHNICAL SKILLS\n\u{2022} Rust\n\u{2022} Kubernetes");
        assert_eq!(skills.value(), &["Rust", "Kubernetes"]);
    }

    #[test]
    fn test_header_token_is_not_captured() {
        let skills = extract_skills("SKILLS\nSoft skills training, Rust");
        assert_eq!(skills.value(), &["Rust"]);
    }

    #[test]
    fn test_empty_text_yields_nine_item_fallback() {
        let skills = extract_skills("");

        assert!(skills.is_fallback());
        assert_eq!(skills.value().len(), 9);
        assert_eq!(skills.value()[0], "JavaScript");
        assert_eq!(skills.value()[8], "Git");
    }
}
