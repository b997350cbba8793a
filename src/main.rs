//! resume-scan: heuristic resume parser with ATS compatibility scoring

mod cli;
mod config;
mod error;
mod input;
mod processing;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeScanError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::{match_label, ScanReport};
use processing::job_match::JobMatcher;
use processing::parser::ResumeParser;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Scan {
            resume,
            job,
            detailed,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt"])
                .map_err(|e| ResumeScanError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt"])
                    .map_err(|e| ResumeScanError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let output_format = cli::parse_output_format(&output).map_err(ResumeScanError::InvalidInput)?;

            info!("Scanning resume: {}", resume.display());

            let mut input_manager =
                InputManager::new().with_cache(config.processing.enable_caching);
            let resume_text = input_manager.extract_from_path(&resume).await?;

            let parser = ResumeParser::from_config(&config);
            let resume_data = parser.parse_text(&resume_text);

            let job_match = match &job {
                Some(job_path) => {
                    let job_text = input_manager.extract_from_path(job_path).await?;
                    Some(JobMatcher::new().score(&resume_data.raw_text, &job_text))
                }
                None => None,
            };

            let report = ScanReport::new(
                resume_data,
                job_match,
                resume.to_string_lossy().to_string(),
            );

            let generator = ReportGenerator::new(
                config.output.color_output,
                detailed || config.output.detailed,
            );

            match save {
                Some(path) => {
                    generator.save(&report, &output_format, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => {
                    print!("{}", generator.format(&report, &output_format)?);
                }
            }
        }

        Commands::Match { resume, job } => {
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt"])
                .map_err(|e| ResumeScanError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt"])
                .map_err(|e| ResumeScanError::InvalidInput(format!("Job description file: {}", e)))?;

            let mut input_manager =
                InputManager::new().with_cache(config.processing.enable_caching);
            let resume_text = input_manager.extract_from_path(&resume).await?;
            let job_text = input_manager.extract_from_path(&job).await?;

            let report = JobMatcher::new().score(&resume_text, &job_text);

            println!(
                "🎯 Job Match: {:.0}% ({})",
                report.match_score,
                match_label(report.match_score)
            );
            println!(
                "  • Matching keywords ({}): {}",
                report.matching_keywords.len(),
                report.matching_keywords.join(", ")
            );
            println!(
                "  • Missing keywords ({}): {}",
                report.missing_keywords.len(),
                report.missing_keywords.join(", ")
            );
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!(
                    "Max experience entries: {}",
                    config.processing.max_experience_entries
                );
                println!(
                    "Bullet lookahead lines: {}",
                    config.processing.bullet_lookahead_lines
                );
                println!(
                    "Max recommendations: {}",
                    config.processing.max_recommendations
                );
                println!("Caching enabled: {}", config.processing.enable_caching);
                println!("Default output format: {:?}", config.output.format);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("✅ Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
