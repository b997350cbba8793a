//! Degree keyword scan for education entries

use crate::processing::capitalize_first;
use crate::processing::resume::Education;
use regex::Regex;

/// Degree keywords in priority order; the first hit wins.
const DEGREE_KEYWORDS: [&str; 11] = [
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "associate",
    "diploma",
    "b.s.",
    "m.s.",
    "b.a.",
    "m.a.",
    "mba",
];

const PLACEHOLDER_FIELD: &str = "Computer Science";

pub struct EducationExtractor {
    year_regex: Regex,
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EducationExtractor {
    pub fn new() -> Self {
        Self {
            year_regex: Regex::new(r"\b(20\d{2}|19\d{2})\b").expect("Invalid year regex"),
        }
    }

    /// Emit at most one record: the first degree keyword found anywhere in
    /// the text, paired with the first 4-digit year token in the whole text.
    /// The field of study is a fixed placeholder; the heuristic does not
    /// attempt to recover it.
    pub fn extract(&self, text: &str) -> Vec<Education> {
        let text_lower = text.to_lowercase();

        for keyword in DEGREE_KEYWORDS {
            if text_lower.contains(keyword) {
                return vec![Education {
                    degree: capitalize_first(keyword),
                    field: PLACEHOLDER_FIELD.to_string(),
                    institution: None,
                    year: self.year_regex.find(text).map(|m| m.as_str().to_string()),
                    gpa: None,
                }];
            }
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record_even_with_multiple_degrees() {
        let extractor = EducationExtractor::new();
        let text = "Master of Science 2018\nBachelor of Arts 2014\nMBA 2021";

        let education = extractor.extract(text);
        assert_eq!(education.len(), 1);
        // "bachelor" precedes "master" in the priority list.
        assert_eq!(education[0].degree, "Bachelor");
    }

    #[test]
    fn test_degree_is_case_insensitive() {
        let extractor = EducationExtractor::new();
        let education = extractor.extract("PHD in physics");
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Phd");
    }

    #[test]
    fn test_year_comes_from_full_text() {
        let extractor = EducationExtractor::new();
        let text = "Worked since 2015.\nBachelor of Science, 2019";

        let education = extractor.extract(text);
        assert_eq!(education[0].year.as_deref(), Some("2015"));
    }

    #[test]
    fn test_year_absent_when_no_year_token() {
        let extractor = EducationExtractor::new();
        let education = extractor.extract("Bachelor of Science");
        assert_eq!(education[0].year, None);
        assert_eq!(education[0].field, "Computer Science");
    }

    #[test]
    fn test_no_degree_keyword_yields_empty() {
        let extractor = EducationExtractor::new();
        assert!(extractor.extract("Self-taught engineer").is_empty());
        assert!(extractor.extract("").is_empty());
    }
}
