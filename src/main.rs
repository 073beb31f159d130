//! Resume matcher: keyword scoring and profile extraction for resumes

use clap::Parser;
use log::{error, info, warn};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction, JobSource};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::InputManager;
use resume_matcher::output::formatter::{save_report_to_file, suggest_filename};
use resume_matcher::output::{AnalysisReport, ProfileReport, ReportGenerator};
use resume_matcher::processing::analyzer::AnalysisEngine;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let loaded = match &cli.config {
        Some(path) => Config::load_or_create(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_file: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format = resolve_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let (job_text, job_source) = read_job_source(&mut input_manager, job).await?;

            let engine = AnalysisEngine::new(&config)?;
            let result = engine.analyze_alignment(&resume_text, &job_text)?;
            let report = AnalysisReport::new(resume.display().to_string(), job_source, result);

            let generator = ReportGenerator::new(config.output.color_output, detailed || config.output.detailed);
            let rendered = generator.generate_analysis(&report, output_format)?;
            println!("{}", rendered);

            if let Some(target) = save {
                let plain = plain_rendering(output_format, &config, detailed, |g| {
                    g.generate_analysis(&report, output_format)
                })?
                .unwrap_or(rendered);
                write_report(&plain, &target, output_format, &resume, "analysis")?;
            }
        }

        Commands::Extract {
            resume,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format = resolve_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let engine = AnalysisEngine::new(&config)?;
            let profile = engine.extract_profile(&resume_text);
            if profile.is_empty() {
                warn!("No profile fields found in {}", resume.display());
            }
            let report = ProfileReport::new(resume.display().to_string(), profile);

            let generator = ReportGenerator::new(config.output.color_output, detailed || config.output.detailed);
            let rendered = generator.generate_profile(&report, output_format)?;
            println!("{}", rendered);

            if let Some(target) = save {
                let plain = plain_rendering(output_format, &config, detailed, |g| {
                    g.generate_profile(&report, output_format)
                })?
                .unwrap_or(rendered);
                write_report(&plain, &target, output_format, &resume, "profile")?;
            }
        }

        Commands::Config { action } => {
            let config_path = config_file.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", config_path.display());
                    let content = toml::to_string_pretty(&config)?;
                    println!("{}", content);

                    let stats = AnalysisEngine::new(&config)?.get_stats();
                    println!("Stop words: {}", stats.stop_words);
                    println!("Known skills: {}", stats.known_skills);
                    println!("Extraction rules: {}", stats.extraction_rules);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&config_path)?;
                    println!("✅ Configuration reset: {}", config_path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }

                Some(ConfigAction::Set { key, value }) => {
                    let mut updated = config;
                    updated.set_value(&key, &value)?;
                    updated.save_to(&config_path)?;
                    println!("✅ {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(ResumeMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}

async fn read_job_source(input_manager: &mut InputManager, job: JobSource) -> Result<(String, String)> {
    match (job.job, job.job_text) {
        (Some(path), _) => {
            cli::validate_file_extension(&path, cli::JOB_EXTENSIONS)
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Job description file: {}", e)))?;
            let text = input_manager.extract_text(&path).await?;
            Ok((text, path.display().to_string()))
        }
        (None, Some(text)) => Ok((text, "inline text".to_string())),
        (None, None) => Err(ResumeMatcherError::InvalidInput(
            "Provide a job description with --job or --job-text".to_string(),
        )),
    }
}

/// Console output carries ANSI codes when colored; re-render without them for files
fn plain_rendering<F>(format: OutputFormat, config: &Config, detailed: bool, render: F) -> Result<Option<String>>
where
    F: FnOnce(&ReportGenerator) -> Result<String>,
{
    if format != OutputFormat::Console || !config.output.color_output {
        return Ok(None);
    }
    let generator = ReportGenerator::new(false, detailed || config.output.detailed);
    render(&generator).map(Some)
}

fn write_report(content: &str, target: &Path, format: OutputFormat, source: &Path, kind: &str) -> Result<()> {
    let path = if target.is_dir() {
        target.join(suggest_filename(format, &source.to_string_lossy(), kind))
    } else {
        target.to_path_buf()
    };

    save_report_to_file(content, &path).map_err(|e| {
        ResumeMatcherError::OutputFormatting(format!("Could not save report to {}: {}", path.display(), e))
    })?;
    info!("Report saved to {}", path.display());
    println!("💾 Saved to {}", path.display());
    Ok(())
}
