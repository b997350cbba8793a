//! Output formatters: console, JSON and markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{match_label, score_label, ScanReport};
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for formatting scan reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharable reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            80..=u8::MAX => Color::Green,
            60..=79 => Color::Cyan,
            40..=59 => Color::Yellow,
            _ => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        let resume = &report.resume;
        let mut out = String::new();

        let _ = writeln!(out, "📄 Resume Scan: {}", report.metadata.source_file);
        let _ = writeln!(out);

        let score_line = format!(
            "ATS Score: {}/100 ({})",
            resume.ats_score,
            score_label(resume.ats_score)
        );
        let _ = writeln!(
            out,
            "{}",
            self.paint(&score_line, Self::score_color(resume.ats_score))
        );

        let breakdown = &resume.score_breakdown;
        let _ = writeln!(out, "  • Personal info: {}/30", breakdown.personal_info);
        let _ = writeln!(out, "  • Skills:        {}/25", breakdown.skills);
        let _ = writeln!(out, "  • Experience:    {}/25", breakdown.experience);
        let _ = writeln!(out, "  • Education:     {}/10", breakdown.education);
        let _ = writeln!(out, "  • Formatting:    {}/10", breakdown.formatting);

        let _ = writeln!(out, "\n👤 Personal Information:");
        let info = &resume.personal_info;
        for (label, value) in [
            ("Name", &info.name),
            ("Email", &info.email),
            ("Phone", &info.phone),
            ("LinkedIn", &info.linkedin),
            ("GitHub", &info.github),
        ] {
            match value {
                Some(v) => {
                    let _ = writeln!(out, "  • {}: {}", label, v);
                }
                None => {
                    let _ = writeln!(out, "  • {}: {}", label, self.paint("missing", Color::Red));
                }
            }
        }

        let _ = writeln!(out, "\n🛠️  Skills ({} matched):", resume.skills_count);
        for category in &resume.skills {
            let _ = writeln!(
                out,
                "  • {}: {}",
                category.category,
                category.skills.join(", ")
            );
        }

        let _ = writeln!(
            out,
            "\n💼 Experience: {} entries ({} words total, ~{} years)",
            resume.experience_count, resume.word_count, resume.years_experience
        );
        if self.detailed {
            for entry in &resume.experience {
                let _ = writeln!(out, "  • {}", entry.title);
                for line in &entry.description {
                    let _ = writeln!(out, "      - {}", line);
                }
            }
        }

        if let Some(education) = resume.education.first() {
            let _ = write!(out, "\n🎓 Education: {} in {}", education.degree, education.field);
            if let Some(year) = &education.year {
                let _ = write!(out, " ({})", year);
            }
            let _ = writeln!(out);
        }

        if !resume.recommendations.is_empty() {
            let _ = writeln!(out, "\n💡 Recommendations:");
            for (i, recommendation) in resume.recommendations.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, recommendation);
            }
        }

        if let Some(job_match) = &report.job_match {
            let match_line = format!(
                "Job Match: {:.0}% ({})",
                job_match.match_score,
                match_label(job_match.match_score)
            );
            let _ = writeln!(
                out,
                "\n🎯 {}",
                self.paint(&match_line, Self::score_color(job_match.match_score as u8))
            );
            let _ = writeln!(
                out,
                "  • Matching keywords: {}",
                job_match.matching_keywords.join(", ")
            );
            let _ = writeln!(
                out,
                "  • Missing keywords: {}",
                job_match.missing_keywords.join(", ")
            );
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        let resume = &report.resume;
        let mut out = String::new();

        let _ = writeln!(out, "# Resume Scan Report");
        let _ = writeln!(out);
        let _ = writeln!(out, "- **Source:** {}", report.metadata.source_file);
        let _ = writeln!(
            out,
            "- **Generated:** {}",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "## ATS Score: {}/100 ({})",
            resume.ats_score,
            score_label(resume.ats_score)
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "| Component | Score | Max |");
        let _ = writeln!(out, "|-----------|-------|-----|");
        let breakdown = &resume.score_breakdown;
        let _ = writeln!(out, "| Personal info | {} | 30 |", breakdown.personal_info);
        let _ = writeln!(out, "| Skills | {} | 25 |", breakdown.skills);
        let _ = writeln!(out, "| Experience | {} | 25 |", breakdown.experience);
        let _ = writeln!(out, "| Education | {} | 10 |", breakdown.education);
        let _ = writeln!(out, "| Formatting | {} | 10 |", breakdown.formatting);
        let _ = writeln!(out);

        let _ = writeln!(out, "## Skills ({} matched)", resume.skills_count);
        let _ = writeln!(out);
        for category in &resume.skills {
            let _ = writeln!(
                out,
                "- **{}:** {}",
                category.category,
                category.skills.join(", ")
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "## Experience ({} entries)", resume.experience_count);
        let _ = writeln!(out);
        for entry in &resume.experience {
            let _ = writeln!(out, "- {}", entry.title);
            for line in &entry.description {
                let _ = writeln!(out, "  - {}", line);
            }
        }
        let _ = writeln!(out);

        if !resume.recommendations.is_empty() {
            let _ = writeln!(out, "## Recommendations");
            let _ = writeln!(out);
            for recommendation in &resume.recommendations {
                let _ = writeln!(out, "1. {}", recommendation);
            }
            let _ = writeln!(out);
        }

        if let Some(job_match) = &report.job_match {
            let _ = writeln!(
                out,
                "## Job Match: {:.0}% ({})",
                job_match.match_score,
                match_label(job_match.match_score)
            );
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "- **Matching:** {}",
                job_match.matching_keywords.join(", ")
            );
            let _ = writeln!(
                out,
                "- **Missing:** {}",
                job_match.missing_keywords.join(", ")
            );
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Coordinates the individual formatters and handles saving to disk.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn format(&self, report: &ScanReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    pub fn save(&self, report: &ScanReport, format: &OutputFormat, path: &Path) -> Result<()> {
        // Saved console output gets no color codes.
        let content = match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(false, self.console.detailed).format_report(report)?
            }
            other => self.format(report, other)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}
