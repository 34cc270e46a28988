//! Certifications extraction

use crate::parsing::model::Extracted;
use crate::parsing::sections::find_section;

const SECTION_HEADERS: &[&str] = &["CERTIFICATIONS", "CERTIFICATES", "LICENSES"];

/// Split the certifications section on newlines only. Unlike the other
/// extractors the fallback is an empty list: having no certifications is a
/// legitimate, common case.
pub fn extract_certifications(text: &str) -> Extracted<Vec<String>> {
    if let Some(section) = find_section(text, SECTION_HEADERS) {
        let certifications: Vec<String> = section
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty() && !line.to_uppercase().contains("CERTIFICATIONS"))
            .collect();
        return Extracted::Matched(certifications);
    }

    Extracted::Fallback(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_certification_per_line() {
        let certs = extract_certifications(
            "CERTIFICATIONS\nAWS Certified Solutions Architect\nCKA: Certified Kubernetes Administrator",
        );

        assert!(!certs.is_fallback());
        assert_eq!(
            certs.value(),
            &[
                "AWS Certified Solutions Architect",
                "CKA: Certified Kubernetes Administrator"
            ]
        );
    }

    #[test]
    fn test_missing_section_yields_empty_list() {
        let certs = extract_certifications("no certifications section");
        assert!(certs.is_fallback());
        assert!(certs.value().is_empty());
    }
}
