//! Contact information extraction

use crate::parsing::model::{ContactInfo, Extracted};
use regex::Regex;

const FALLBACK_NAME: &str = "John Doe";
const FALLBACK_EMAIL: &str = "john.doe@example.com";
const FALLBACK_PHONE: &str = "(555) 123-4567";
const FALLBACK_LOCATION: &str = "San Francisco, CA";
const FALLBACK_LINKEDIN: &str = "linkedin.com/in/johndoe";

/// Independent regex passes over the full text; each field falls back on
/// its own, so the fields are not correlated. A resume with no name but a
/// clear email still gets the placeholder name.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let email_re = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    let phone_re =
        Regex::new(r"(\+\d{1,3}[- ]?)?(\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
    let name_re = Regex::new(r"(?m)^([A-Z][a-z]+(?: [A-Z][a-z]+)+)$").unwrap();
    let linkedin_re = Regex::new(r"linkedin\.com/in/[a-zA-Z0-9-]+").unwrap();
    let location_re = Regex::new(r"([A-Z][a-z]+(?:[ -][A-Z][a-z]+)*),\s*([A-Z]{2})").unwrap();

    let matched = |m: Option<regex::Match>, fallback: &str| match m {
        Some(m) => Extracted::Matched(m.as_str().to_string()),
        None => Extracted::Fallback(fallback.to_string()),
    };

    let location = match location_re.captures(text) {
        Some(caps) => Extracted::Matched(format!("{}, {}", &caps[1], &caps[2])),
        None => Extracted::Fallback(FALLBACK_LOCATION.to_string()),
    };

    ContactInfo {
        name: matched(name_re.find(text), FALLBACK_NAME),
        email: matched(email_re.find(text), FALLBACK_EMAIL),
        phone: matched(phone_re.find(text), FALLBACK_PHONE),
        location,
        linkedin: matched(linkedin_re.find(text), FALLBACK_LINKEDIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_matched() {
        let text = "Jane Smith\njane.smith@mail.com\n(415) 555-0100\nOakland, CA\nlinkedin.com/in/janesmith";
        let contact = extract_contact_info(text);

        assert_eq!(contact.name, Extracted::Matched("Jane Smith".to_string()));
        assert_eq!(
            contact.email,
            Extracted::Matched("jane.smith@mail.com".to_string())
        );
        assert_eq!(
            contact.phone,
            Extracted::Matched("(415) 555-0100".to_string())
        );
        assert_eq!(
            contact.location,
            Extracted::Matched("Oakland, CA".to_string())
        );
        assert_eq!(
            contact.linkedin,
            Extracted::Matched("linkedin.com/in/janesmith".to_string())
        );
    }

    #[test]
    fn test_empty_text_yields_all_fallbacks() {
        let contact = extract_contact_info("");

        assert_eq!(contact.name, Extracted::Fallback(FALLBACK_NAME.to_string()));
        assert_eq!(contact.email, Extracted::Fallback(FALLBACK_EMAIL.to_string()));
        assert_eq!(contact.phone, Extracted::Fallback(FALLBACK_PHONE.to_string()));
        assert_eq!(
            contact.location,
            Extracted::Fallback(FALLBACK_LOCATION.to_string())
        );
        assert_eq!(
            contact.linkedin,
            Extracted::Fallback(FALLBACK_LINKEDIN.to_string())
        );
    }

    #[test]
    fn test_fields_fall_back_independently() {
        let contact = extract_contact_info("reach me at someone@example.org");

        assert!(!contact.email.is_fallback());
        assert!(contact.name.is_fallback());
        assert!(contact.phone.is_fallback());
    }

    #[test]
    fn test_phone_variants() {
        for phone in ["555-123-4567", "(555) 123-4567", "+1 555.123.4567"] {
            let contact = extract_contact_info(phone);
            assert!(!contact.phone.is_fallback(), "should match {}", phone);
        }
    }

    #[test]
    fn test_name_must_be_alone_on_its_line() {
        let contact = extract_contact_info("Senior Developer at Acme since May");
        assert!(contact.name.is_fallback());
    }
}
