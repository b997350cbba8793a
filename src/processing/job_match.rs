//! Vocabulary-overlap scoring between a resume and a job description

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Function words and recruiting boilerplate excluded from the vocabulary
/// comparison on both sides.
const STOP_WORDS: [&str; 45] = [
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "a", "an",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "will", "would", "could",
    "should", "may", "might", "can", "must", "looking", "seeking", "experience", "experienced",
    "knowledge", "required", "requirements", "preferred", "years", "skills", "work", "working",
    "role", "candidate",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchReport {
    /// Percentage of job-description vocabulary present in the resume,
    /// 0 when the job description has no usable tokens.
    pub match_score: f32,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Scores a resume's vocabulary overlap against a job description.
/// Invoked independently of the parsing pipeline whenever a job description
/// is supplied.
pub struct JobMatcher {
    word_regex: Regex,
    stop_words: HashSet<&'static str>,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl JobMatcher {
    pub fn new() -> Self {
        Self {
            word_regex: Regex::new(r"\w+").expect("Invalid word regex"),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn score(&self, resume_text: &str, job_description: &str) -> JobMatchReport {
        let resume_words = self.tokenize(resume_text);
        let job_words = self.tokenize(job_description);

        let matching_keywords: Vec<String> =
            job_words.intersection(&resume_words).cloned().collect();
        let missing_keywords: Vec<String> = job_words.difference(&resume_words).cloned().collect();

        let match_score = if job_words.is_empty() {
            0.0
        } else {
            let ratio = matching_keywords.len() as f32 / job_words.len() as f32;
            (ratio * 100.0).min(100.0)
        };

        JobMatchReport {
            match_score,
            matching_keywords,
            missing_keywords,
        }
    }

    /// Lower-cased word tokens, minus stop words and tokens of length <= 2.
    /// A `BTreeSet` keeps iteration deterministic.
    fn tokenize(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        self.word_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.len() > 2 && !self.stop_words.contains(word))
            .map(str::to_string)
            .collect()
    }
}
