//! ATS score calculation

use crate::processing::resume::{PersonalInfo, ScoreBreakdown};

/// Deterministic weighted point sum over the extracted fields.
///
/// Component caps: personal info 30, skills 25, experience 25, education 10,
/// formatting 10. The keywords sub-score is reserved and always 0. The total
/// is capped at 100.
pub fn calculate_ats_score(
    personal_info: &PersonalInfo,
    skills_count: usize,
    experience_count: usize,
    education_count: usize,
    word_count: usize,
) -> (u8, ScoreBreakdown) {
    let mut personal = 0u8;
    if personal_info.name.is_some() {
        personal += 10;
    }
    if personal_info.email.is_some() {
        personal += 10;
    }
    if personal_info.phone.is_some() {
        personal += 5;
    }
    if personal_info.linkedin.is_some() {
        personal += 3;
    }
    if personal_info.github.is_some() {
        personal += 2;
    }

    let formatting = if (300..=800).contains(&word_count) {
        10
    } else if word_count >= 200 {
        7
    } else {
        3
    };

    let breakdown = ScoreBreakdown {
        personal_info: personal,
        skills: (skills_count * 2).min(25) as u8,
        experience: (experience_count * 8).min(25) as u8,
        education: (education_count * 5).min(10) as u8,
        formatting,
        keywords: 0,
    };

    (breakdown.total(), breakdown)
}
