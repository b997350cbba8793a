//! Structured resume data produced by the parsing pipeline
//!
//! All records are plain data, built once per parse and not mutated
//! afterwards.

use serde::{Deserialize, Serialize};

/// Contact details pulled out of the resume text. Every field is
/// independently optional; a resume with no recognizable contact
/// information is a valid (if poorly scoring) input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// Skills matched for one category of the fixed skill table.
///
/// Categories are kept as an ordered sequence rather than a hash map so
/// output order is deterministic: categories appear in table order, skills
/// in first-match order within each category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategoryMatches {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub description: Vec<String>,
    pub technologies: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub gpa: Option<String>,
}

/// Per-component sub-scores. Individual caps sum to exactly 100:
/// personal info 30, skills 25, experience 25, education 10, formatting 10,
/// keywords 0 (reserved, never populated).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub personal_info: u8,
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub formatting: u8,
    pub keywords: u8,
}

impl ScoreBreakdown {
    /// Sum of all sub-scores, capped at 100. The cap is redundant given the
    /// individual caps but applied anyway.
    pub fn total(&self) -> u8 {
        let sum = self.personal_info as u32
            + self.skills as u32
            + self.experience as u32
            + self.education as u32
            + self.formatting as u32
            + self.keywords as u32;
        sum.min(100) as u8
    }
}

/// Aggregate result of a single parse invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub skills: Vec<SkillCategoryMatches>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub ats_score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
    pub word_count: usize,
    pub skills_count: usize,
    pub experience_count: usize,
    pub years_experience: i32,
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total_sums_components() {
        let breakdown = ScoreBreakdown {
            personal_info: 30,
            skills: 25,
            experience: 16,
            education: 5,
            formatting: 10,
            keywords: 0,
        };
        assert_eq!(breakdown.total(), 86);
    }

    #[test]
    fn test_breakdown_total_is_capped() {
        let breakdown = ScoreBreakdown {
            personal_info: 30,
            skills: 25,
            experience: 25,
            education: 10,
            formatting: 10,
            keywords: 10,
        };
        assert_eq!(breakdown.total(), 100);
    }
}
