//! Heuristic field extraction from resume plain text

pub mod ats;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod format;
pub mod model;
pub mod sections;
pub mod skills;

use model::{ContactInfo, EducationEntry, ExperienceEntry, Extracted, ParsedResume, ResumeFormat};

/// Output of the section-extraction phase, before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSections {
    pub format: ResumeFormat,
    pub contact_info: ContactInfo,
    pub experience: Extracted<Vec<ExperienceEntry>>,
    pub education: Extracted<Vec<EducationEntry>>,
    pub skills: Extracted<Vec<String>>,
    pub certifications: Extracted<Vec<String>>,
}

/// Run every section extractor over the same immutable text. Total
/// function: extraction never fails, each extractor falls back to fixed
/// placeholder values when nothing matches. The extractors have no data
/// dependency on each other.
pub fn extract_sections(text: &str) -> ExtractedSections {
    ExtractedSections {
        format: format::detect_resume_format(text),
        contact_info: contact::extract_contact_info(text),
        experience: experience::extract_experience(text),
        education: education::extract_education(text),
        skills: skills::extract_skills(text),
        certifications: certifications::extract_certifications(text),
    }
}

impl ExtractedSections {
    /// Derive the ATS score and assemble the immutable aggregate result.
    pub fn into_resume(self, text: &str) -> ParsedResume {
        let ats_score = ats::calculate_ats_score(
            text,
            &self.contact_info,
            self.experience.value(),
            self.education.value(),
            self.skills.value(),
        );

        ParsedResume {
            raw_text: text.to_string(),
            format: self.format,
            contact_info: self.contact_info,
            experience: self.experience,
            education: self.education,
            skills: self.skills,
            certifications: self.certifications,
            ats_score,
            word_count: text.split_whitespace().count(),
        }
    }
}

/// One-shot structured extraction: sections plus score.
pub fn extract_structured_data(text: &str) -> ParsedResume {
    extract_sections(text).into_resume(text)
}
