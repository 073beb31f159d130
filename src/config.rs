//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub vocabulary: VocabularyConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Tokens must be strictly longer than this many characters
    pub min_token_len: usize,
    pub max_matched_keywords: usize,
    pub max_weaknesses: usize,
    pub max_missing_keywords: usize,
    /// Lowest score of the strong band
    pub strong_threshold: u8,
    /// Lowest score of the moderate band
    pub moderate_threshold: u8,
}

/// Additions on top of the built-in vocabulary lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub extra_stop_words: Vec<String>,
    pub extra_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub name_scan_lines: usize,
    pub name_min_len: usize,
    pub name_max_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_token_len: 2,
            max_matched_keywords: 15,
            max_weaknesses: 5,
            max_missing_keywords: 20,
            strong_threshold: 70,
            moderate_threshold: 40,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_scan_lines: 10,
            name_min_len: 4,
            name_max_len: 39,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        Self::load_or_create(&Self::config_path())
    }

    /// Load `path`, or write the defaults there if it does not exist yet
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        if scoring.strong_threshold > 100 || scoring.moderate_threshold > scoring.strong_threshold {
            return Err(ResumeMatcherError::Configuration(format!(
                "Band thresholds must satisfy moderate <= strong <= 100 (got {} / {})",
                scoring.moderate_threshold, scoring.strong_threshold
            )));
        }

        let extraction = &self.extraction;
        if extraction.name_min_len > extraction.name_max_len {
            return Err(ResumeMatcherError::Configuration(format!(
                "name_min_len ({}) exceeds name_max_len ({})",
                extraction.name_min_len, extraction.name_max_len
            )));
        }

        Ok(())
    }

    /// Set a single value by dotted key, e.g. `scoring.strong_threshold`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scoring.min_token_len" => self.scoring.min_token_len = parse_value(key, value)?,
            "scoring.max_matched_keywords" => self.scoring.max_matched_keywords = parse_value(key, value)?,
            "scoring.max_weaknesses" => self.scoring.max_weaknesses = parse_value(key, value)?,
            "scoring.max_missing_keywords" => self.scoring.max_missing_keywords = parse_value(key, value)?,
            "scoring.strong_threshold" => self.scoring.strong_threshold = parse_value(key, value)?,
            "scoring.moderate_threshold" => self.scoring.moderate_threshold = parse_value(key, value)?,
            "extraction.name_scan_lines" => self.extraction.name_scan_lines = parse_value(key, value)?,
            "extraction.name_min_len" => self.extraction.name_min_len = parse_value(key, value)?,
            "extraction.name_max_len" => self.extraction.name_max_len = parse_value(key, value)?,
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeMatcherError::Configuration)?
            }
            _ => {
                return Err(ResumeMatcherError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        self.validate()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ResumeMatcherError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = Config::default();
        assert_eq!(config.scoring.max_matched_keywords, 15);
        assert_eq!(config.scoring.max_weaknesses, 5);
        assert_eq!(config.scoring.max_missing_keywords, 20);
        assert_eq!(config.scoring.strong_threshold, 70);
        assert_eq!(config.scoring.moderate_threshold, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.vocabulary.extra_skills.push("Rust".to_string());
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_create_writes_defaults_for_new_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh").join("config.toml");

        let mut config = Config::load_or_create(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        config.set_value("scoring.max_weaknesses", "2").unwrap();
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_or_create(&path).unwrap().scoring.max_weaknesses, 2);

        Config::default().save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nmax_missing_keywords = 8\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.max_missing_keywords, 8);
        assert_eq!(loaded.scoring.max_matched_keywords, 15);
        assert_eq!(loaded.extraction, ExtractionConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::Configuration(_)));
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("scoring.max_weaknesses", "3").unwrap();
        config.set_value("output.format", "md").unwrap();

        assert_eq!(config.scoring.max_weaknesses, 3);
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert!(config.set_value("scoring.unknown", "1").is_err());
        assert!(config.set_value("scoring.max_weaknesses", "many").is_err());
    }

    #[test]
    fn test_set_value_rejects_inverted_thresholds() {
        let mut config = Config::default();
        assert!(config.set_value("scoring.moderate_threshold", "90").is_err());
    }
}
