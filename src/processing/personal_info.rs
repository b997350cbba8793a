//! Personal information extraction via regex heuristics

use crate::processing::resume::PersonalInfo;
use regex::Regex;

/// Extracts contact details from resume text. Each field is matched
/// independently, first occurrence wins. Absence of a pattern is a valid
/// result, never an error.
pub struct PersonalInfoExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    github_regex: Regex,
    name_chars_regex: Regex,
}

impl Default for PersonalInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalInfoExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
            .expect("Invalid phone regex");

        let linkedin_regex =
            Regex::new(r"(?i)linkedin\.com/in/[\w-]+").expect("Invalid LinkedIn regex");

        let github_regex = Regex::new(r"(?i)github\.com/[\w-]+").expect("Invalid GitHub regex");

        let name_chars_regex = Regex::new(r"^[A-Za-z\s.\-']+$").expect("Invalid name regex");

        Self {
            email_regex,
            phone_regex,
            linkedin_regex,
            github_regex,
            name_chars_regex,
        }
    }

    pub fn extract(&self, text: &str) -> PersonalInfo {
        PersonalInfo {
            name: self.extract_name(text),
            email: self.email_regex.find(text).map(|m| m.as_str().to_string()),
            phone: self.phone_regex.find(text).map(|m| m.as_str().to_string()),
            location: None,
            linkedin: self
                .linkedin_regex
                .find(text)
                .map(|m| format!("https://{}", m.as_str())),
            github: self
                .github_regex
                .find(text)
                .map(|m| format!("https://{}", m.as_str())),
        }
    }

    /// Name heuristic: scan the first 5 non-blank lines and accept the first
    /// one that is 5-49 characters long, contains only letters, spaces and
    /// `.`/`-`/`'`, and splits into 2-4 words.
    fn extract_name(&self, text: &str) -> Option<String> {
        for line in text.lines().filter(|l| !l.trim().is_empty()).take(5) {
            let trimmed = line.trim();
            if trimmed.len() >= 5
                && trimmed.len() < 50
                && self.name_chars_regex.is_match(trimmed)
            {
                let words = trimmed.split_whitespace().count();
                if (2..=4).contains(&words) {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}
