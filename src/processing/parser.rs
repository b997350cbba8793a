//! The parsing pipeline: extraction, scoring and recommendations in one pass

use crate::config::Config;
use crate::error::Result;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::extract_text;
use crate::processing::education::EducationExtractor;
use crate::processing::experience::ExperienceExtractor;
use crate::processing::personal_info::PersonalInfoExtractor;
use crate::processing::recommendations::{generate_recommendations, DEFAULT_MAX_RECOMMENDATIONS};
use crate::processing::resume::ResumeData;
use crate::processing::scoring::calculate_ats_score;
use crate::processing::skills::SkillsExtractor;
use chrono::{Datelike, Utc};
use log::debug;
use regex::Regex;

/// Runs the full extraction pipeline over a resume document.
///
/// Each parse invocation is independent and stateless: the extractors hold
/// only compiled patterns, so a parser can be reused across documents.
pub struct ResumeParser {
    personal_info: PersonalInfoExtractor,
    skills: SkillsExtractor,
    experience: ExperienceExtractor,
    education: EducationExtractor,
    year_regex: Regex,
    max_recommendations: usize,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        Self {
            personal_info: PersonalInfoExtractor::new(),
            skills: SkillsExtractor::new(),
            experience: ExperienceExtractor::new(),
            education: EducationExtractor::new(),
            year_regex: Regex::new(r"\b(20\d{2}|19\d{2})\b").expect("Invalid year regex"),
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            experience: ExperienceExtractor::with_limits(
                config.processing.max_experience_entries,
                config.processing.bullet_lookahead_lines,
            ),
            max_recommendations: config.processing.max_recommendations,
            ..Self::new()
        }
    }

    /// Parse a document given its raw bytes and declared type. This is the
    /// single fallible entry point: once text extraction succeeds, the rest
    /// of the pipeline always succeeds.
    pub fn parse_bytes(&self, bytes: &[u8], file_type: &FileType) -> Result<ResumeData> {
        let text = extract_text(bytes, file_type)?;
        Ok(self.parse_text(&text))
    }

    /// Run the pipeline over already-extracted plain text. Total over
    /// arbitrary text; heuristics that find nothing yield absent fields and
    /// empty collections.
    pub fn parse_text(&self, text: &str) -> ResumeData {
        let personal_info = self.personal_info.extract(text);
        let skills = self.skills.extract(text);
        let experience = self.experience.extract(text);
        let education = self.education.extract(text);

        let word_count = text.split_whitespace().count();
        let skills_count = skills.iter().map(|c| c.skills.len()).sum();
        let experience_count = experience.len();
        let years_experience = self.estimate_years_experience(text);

        let (ats_score, score_breakdown) = calculate_ats_score(
            &personal_info,
            skills_count,
            experience_count,
            education.len(),
            word_count,
        );

        debug!(
            "Parsed resume: {} words, {} skills, {} experience entries, score {}",
            word_count, skills_count, experience_count, ats_score
        );

        let mut data = ResumeData {
            personal_info,
            skills,
            experience,
            education,
            ats_score,
            score_breakdown,
            recommendations: Vec::new(),
            word_count,
            skills_count,
            experience_count,
            years_experience,
            raw_text: text.to_string(),
        };

        // Recommendations are the last step: they see the assembled data.
        data.recommendations = generate_recommendations(&data, self.max_recommendations);
        data
    }

    /// Rough tenure estimate: with at least two 4-digit year tokens in the
    /// text, the distance from the earliest year to the current one.
    fn estimate_years_experience(&self, text: &str) -> i32 {
        let years: Vec<i32> = self
            .year_regex
            .find_iter(text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        match years.iter().min() {
            Some(&earliest) if years.len() >= 2 => Utc::now().year() - earliest,
            _ => 0,
        }
    }
}
