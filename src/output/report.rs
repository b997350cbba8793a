//! Scan report: the parsed resume plus job match and generation metadata

use crate::processing::job_match::JobMatchReport;
use crate::processing::resume::ResumeData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub resume: ResumeData,
    pub job_match: Option<JobMatchReport>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scanner_version: String,
    pub source_file: String,
}

impl ScanReport {
    pub fn new(resume: ResumeData, job_match: Option<JobMatchReport>, source_file: String) -> Self {
        Self {
            resume,
            job_match,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scanner_version: env!("CARGO_PKG_VERSION").to_string(),
                source_file,
            },
        }
    }
}

/// Human label for an ATS score band.
pub fn score_label(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "Excellent",
        60..=79 => "Good",
        40..=59 => "Fair",
        _ => "Needs Improvement",
    }
}

/// Human label for a job-match percentage.
pub fn match_label(score: f32) -> &'static str {
    if score >= 80.0 {
        "Excellent Match"
    } else if score >= 60.0 {
        "Good Match"
    } else if score >= 40.0 {
        "Fair Match"
    } else {
        "Needs Improvement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_labels() {
        assert_eq!(score_label(100), "Excellent");
        assert_eq!(score_label(80), "Excellent");
        assert_eq!(score_label(79), "Good");
        assert_eq!(score_label(45), "Fair");
        assert_eq!(score_label(3), "Needs Improvement");
    }

    #[test]
    fn test_match_labels() {
        assert_eq!(match_label(85.0), "Excellent Match");
        assert_eq!(match_label(60.0), "Good Match");
        assert_eq!(match_label(50.0), "Fair Match");
        assert_eq!(match_label(10.0), "Needs Improvement");
    }
}
