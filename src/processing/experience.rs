//! Heuristic work-experience extraction

use crate::processing::resume::Experience;
use regex::Regex;

pub const DEFAULT_MAX_ENTRIES: usize = 5;
pub const DEFAULT_BULLET_LOOKAHEAD: usize = 9;

const BULLET_MARKERS: [char; 3] = ['\u{2022}', '-', '*'];

/// Line-oriented scan for job entries, keyed on 4-digit year tokens.
///
/// A line is a job-entry candidate when it contains a 19xx/20xx year and its
/// trimmed length exceeds 10 characters. The candidate line becomes the
/// entry title verbatim; bullet lines among the following lines become the
/// description.
pub struct ExperienceExtractor {
    year_regex: Regex,
    max_entries: usize,
    bullet_lookahead: usize,
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_ENTRIES, DEFAULT_BULLET_LOOKAHEAD)
    }

    pub fn with_limits(max_entries: usize, bullet_lookahead: usize) -> Self {
        Self {
            year_regex: Regex::new(r"\b(20\d{2}|19\d{2})\b").expect("Invalid year regex"),
            max_entries,
            bullet_lookahead,
        }
    }

    pub fn extract(&self, text: &str) -> Vec<Experience> {
        let lines: Vec<&str> = text.lines().collect();
        let mut entries = Vec::new();

        for (idx, raw_line) in lines.iter().enumerate() {
            let line = raw_line.trim();

            if line.len() > 10 && self.year_regex.is_match(line) {
                entries.push(Experience {
                    title: line.to_string(),
                    company: None,
                    duration: None,
                    location: None,
                    description: self.collect_bullets(&lines[idx + 1..]),
                    technologies: None,
                });

                if entries.len() >= self.max_entries {
                    break;
                }
            }
        }

        entries
    }

    /// Gather bullet-line remainders from the lines following a candidate.
    /// The first blank line terminates the sub-scan; non-bullet text lines
    /// are skipped.
    fn collect_bullets(&self, following: &[&str]) -> Vec<String> {
        let mut description = Vec::new();

        for raw_line in following.iter().take(self.bullet_lookahead) {
            let line = raw_line.trim();
            if line.is_empty() {
                break;
            }
            if let Some(rest) = strip_bullet_marker(line) {
                description.push(rest.to_string());
            }
        }

        description
    }
}

fn strip_bullet_marker(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(*marker))
        .map(str::trim)
}
