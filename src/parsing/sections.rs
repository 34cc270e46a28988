//! Section location and block splitting over resume plain text
//!
//! A section starts at a line equal to one of a vocabulary of headers
//! (case-insensitive, trailing colon tolerated) and runs until the next
//! ALL-CAPS header line or end of text. Implemented as an explicit scan
//! over lines rather than a single regex so the boundary cases stay
//! enumerable.

use regex::Regex;

enum ScanState {
    SeekingHeader,
    InBody,
}

/// Find the first section whose header matches the vocabulary, trying the
/// headers in order. The returned text includes the header line.
pub fn find_section(text: &str, headers: &[&str]) -> Option<String> {
    headers.iter().find_map(|header| scan_for(text, header))
}

fn scan_for(text: &str, header: &str) -> Option<String> {
    let mut state = ScanState::SeekingHeader;
    let mut collected: Vec<&str> = Vec::new();

    for line in text.lines() {
        match state {
            ScanState::SeekingHeader => {
                if matches_header(line, header) {
                    collected.push(line);
                    state = ScanState::InBody;
                }
            }
            ScanState::InBody => {
                if is_section_boundary(line) {
                    break;
                }
                collected.push(line);
            }
        }
    }

    match state {
        ScanState::InBody => Some(collected.join("\n")),
        ScanState::SeekingHeader => None,
    }
}

fn matches_header(line: &str, header: &str) -> bool {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    trimmed.eq_ignore_ascii_case(header)
}

/// A line of two or more characters that is entirely uppercase letters and
/// spaces (trailing colon tolerated) ends the current section.
pub fn is_section_boundary(line: &str) -> bool {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    if trimmed.chars().count() < 2 {
        return false;
    }
    let mut has_letter = false;
    for c in trimmed.chars() {
        if c.is_ascii_uppercase() {
            has_letter = true;
        } else if c != ' ' {
            return false;
        }
    }
    has_letter
}

/// Split a section body into per-entry blocks on blank-line runs, skipping
/// the header block. Used by the experience and education extractors.
pub fn entry_blocks(section: &str) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in section.lines() {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks.into_iter().skip(1).collect()
}

/// Extract a "Month YYYY - Month YYYY|Present|Current" pair from anywhere
/// in an entry block.
pub fn date_range(block: &str) -> Option<(String, String)> {
    let re = Regex::new(r"(?i)(\w+\s+\d{4})\s*[-–]\s*(\w+\s+\d{4}|Present|Current)").unwrap();
    re.captures(block)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// Split "Company, Location" or "Company in Location" into its parts.
pub fn split_affiliation(line: &str) -> (String, Option<String>) {
    let re = Regex::new(r"^(.+?)(?:,\s*|\s+in\s+)(.+)$").unwrap();
    match re.captures(line.trim()) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].trim().to_string()),
        ),
        None => (line.trim().to_string(), None),
    }
}
