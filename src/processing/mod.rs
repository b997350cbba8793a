//! Resume parsing pipeline: extraction, scoring and recommendations

pub mod education;
pub mod experience;
pub mod job_match;
pub mod parser;
pub mod personal_info;
pub mod recommendations;
pub mod resume;
pub mod scoring;
pub mod skills;

/// Capitalize the first letter of a token, leaving the rest unchanged
/// ("node.js" becomes "Node.js", "mba" becomes "Mba").
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
