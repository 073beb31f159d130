//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md"];
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md"];

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Keyword match scoring and profile extraction for resumes")]
#[command(long_about = "Score a resume against a job description by keyword overlap, and pull contact details, skills and sections out of a resume")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        #[command(flatten)]
        job: JobSource,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (a directory gets a generated file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show weaknesses and report metadata
        #[arg(short, long)]
        detailed: bool,
    },

    /// Suggest profile fields from a resume
    Extract {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (a directory gets a generated file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Print full section text
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Exactly one job description source
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct JobSource {
    /// Path to job description file (TXT, MD)
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Job description passed inline
    #[arg(long)]
    pub job_text: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Reset configuration to defaults
    Reset,
    /// Print the configuration file location
    Path,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.strong_threshold")
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
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

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("job.pdf"), JOB_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("README"), RESUME_EXTENSIONS).is_err());
    }

    #[test]
    fn test_analyze_requires_one_job_source() {
        let cli = Cli::try_parse_from([
            "resume-matcher", "analyze", "--resume", "cv.txt", "--job-text", "Rust developer",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze { job, .. } => {
                assert_eq!(job.job_text.as_deref(), Some("Rust developer"));
                assert!(job.job.is_none());
            }
            _ => panic!("expected analyze"),
        }

        assert!(Cli::try_parse_from(["resume-matcher", "analyze", "--resume", "cv.txt"]).is_err());
        assert!(Cli::try_parse_from([
            "resume-matcher", "analyze", "--resume", "cv.txt", "--job", "job.txt", "--job-text", "x",
        ])
        .is_err());
    }

    #[test]
    fn test_config_set_parses() {
        let cli = Cli::try_parse_from([
            "resume-matcher", "--verbose", "config", "set", "output.format", "json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Config { action: Some(ConfigAction::Set { ref key, .. }) } if key == "output.format"
        ));
    }
}
