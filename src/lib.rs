//! Resume scanner library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeScanError};
pub use processing::job_match::{JobMatchReport, JobMatcher};
pub use processing::parser::ResumeParser;
pub use processing::resume::ResumeData;
