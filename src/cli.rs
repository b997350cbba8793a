//! CLI interface for the resume scanner

use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(name = "resume-scan")]
#[command(about = "Heuristic resume parser with ATS compatibility scoring")]
#[command(
    long_about = "Parse a resume, extract structured contact/skills/experience data, compute an ATS compatibility score with recommendations, and optionally match the resume against a job description"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and score a resume
    Scan {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: std::path::PathBuf,

        /// Optional job description file (TXT) to match against
        #[arg(short, long)]
        job: Option<std::path::PathBuf>,

        /// Show extracted entries and the full score breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file instead of printing
        #[arg(short, long)]
        save: Option<std::path::PathBuf>,
    },

    /// Match a resume against a job description (no full scan output)
    Match {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: std::path::PathBuf,

        /// Path to job description file (TXT)
        #[arg(short, long)]
        job: std::path::PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_output_format_parsing() {
        assert!(parse_output_format("console").is_ok());
        assert!(parse_output_format("JSON").is_ok());
        assert!(parse_output_format("md").is_ok());
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_extension_validation() {
        let allowed = ["pdf", "docx", "txt"];
        assert!(validate_file_extension(&PathBuf::from("resume.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.docx"), &allowed).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.odt"), &allowed).is_err());
        assert!(validate_file_extension(&PathBuf::from("resume"), &allowed).is_err());
    }
}
