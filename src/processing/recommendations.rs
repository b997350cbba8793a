//! Rule-based recommendation generation

use crate::processing::resume::ResumeData;

pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 8;

/// Map field absence and threshold violations on the fully-assembled resume
/// data to advisory strings. Rules fire in a fixed order and the result is
/// truncated to `max` entries.
pub fn generate_recommendations(data: &ResumeData, max: usize) -> Vec<String> {
    let mut recommendations = Vec::new();

    if data.personal_info.name.is_none() {
        recommendations.push("Add your full name prominently at the top of your resume".to_string());
    }
    if data.personal_info.email.is_none() {
        recommendations.push("Include a professional email address".to_string());
    }
    if data.personal_info.phone.is_none() {
        recommendations.push("Add your phone number for direct contact".to_string());
    }
    if data.personal_info.linkedin.is_none() {
        recommendations
            .push("Add your LinkedIn profile URL to increase professional visibility".to_string());
    }
    if data.personal_info.github.is_none() && data.skills_count > 5 {
        recommendations
            .push("Include your GitHub profile to showcase your technical projects".to_string());
    }

    if data.skills_count < 8 {
        recommendations.push(
            "Add more relevant skills to strengthen your profile (aim for 10-15 skills)"
                .to_string(),
        );
    } else if data.skills_count > 25 {
        recommendations.push(
            "Focus on your most relevant skills (consider reducing to 15-20 core skills)"
                .to_string(),
        );
    }

    if data.experience_count == 0 {
        recommendations
            .push("Add your work experience, internships, or relevant projects".to_string());
    } else if data.experience_count < 2 {
        recommendations
            .push("Include additional work experience or significant projects".to_string());
    }

    if data.word_count < 300 {
        recommendations
            .push("Expand your resume content with more detailed descriptions".to_string());
    } else if data.word_count > 800 {
        recommendations
            .push("Consider condensing your resume content to improve readability".to_string());
    }

    if data.ats_score < 70 {
        recommendations.push(
            "Improve ATS compatibility by addressing missing sections and optimizing keywords"
                .to_string(),
        );
    }

    recommendations.truncate(max);
    recommendations
}
