//! ATS completeness scoring
//!
//! A synthetic completeness heuristic, not a real applicant tracking
//! system's scoring. Pure additive point accumulation; the per-component
//! caps keep the total within [0, 100] by construction.

use crate::parsing::model::{ContactInfo, EducationEntry, ExperienceEntry};

/// Score the effective extracted values. Fallback values count the same as
/// matched ones, so a fully-fallback resume still gets a deterministic
/// baseline score.
pub fn calculate_ats_score(
    text: &str,
    contact: &ContactInfo,
    experience: &[ExperienceEntry],
    education: &[EducationEntry],
    skills: &[String],
) -> u8 {
    let mut score: usize = 0;

    // Contact info completeness (20 points)
    for field in [
        &contact.name,
        &contact.email,
        &contact.phone,
        &contact.location,
        &contact.linkedin,
    ] {
        if !field.value().is_empty() {
            score += 4;
        }
    }

    // Experience (30 points)
    score += (experience.len() * 10).min(30);

    // Education (20 points)
    score += (education.len() * 10).min(20);

    // Skills (20 points)
    score += (skills.len() * 2).min(20);

    // Length and detail (10 points)
    let word_count = text.split_whitespace().count();
    if word_count > 300 {
        score += 5;
    }
    if word_count > 600 {
        score += 5;
    }

    score as u8
}
