//! Analysis engine: validates input and runs the matcher and extractor

use crate::config::Config;
use crate::error::{Result, ResumeMatcherError};
use crate::processing::extractor::ProfileExtractor;
use crate::processing::keyword_matcher::{KeywordMatcher, MatchResult};
use crate::processing::profile::ProfileFields;
use crate::processing::vocabulary::Vocabulary;
use log::{debug, info};
use std::time::Instant;

pub const MISSING_INPUT_MESSAGE: &str = "Please provide both resume content and job description.";

/// Coordinates keyword matching and profile extraction
pub struct AnalysisEngine {
    matcher: KeywordMatcher,
    extractor: ProfileExtractor,
    vocabulary: Vocabulary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStats {
    pub stop_words: usize,
    pub known_skills: usize,
    pub extraction_rules: usize,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let vocabulary = Vocabulary::from_config(&config.vocabulary);
        let matcher = KeywordMatcher::from_config(config, &vocabulary);
        let extractor = ProfileExtractor::from_vocabulary(&vocabulary, &config.extraction)?;

        debug!(
            "Analysis engine ready: {} stop words, {} known skills",
            vocabulary.stop_words.len(),
            vocabulary.skills.len()
        );

        Ok(Self {
            matcher,
            extractor,
            vocabulary,
        })
    }

    /// Score a resume against a job description; both must contain text
    pub fn analyze_alignment(&self, resume_text: &str, job_text: &str) -> Result<MatchResult> {
        if resume_text.trim().is_empty() || job_text.trim().is_empty() {
            return Err(ResumeMatcherError::InvalidInput(MISSING_INPUT_MESSAGE.to_string()));
        }

        let start = Instant::now();
        let result = self.matcher.analyze(resume_text, job_text);

        info!(
            "Keyword analysis finished in {}ms: score {}% ({})",
            start.elapsed().as_millis(),
            result.score,
            result.band
        );

        Ok(result)
    }

    /// Suggest profile fields from resume text. Any text is accepted.
    pub fn extract_profile(&self, resume_text: &str) -> ProfileFields {
        let profile = self.extractor.extract(resume_text);
        info!("Extracted {} of 10 profile fields", profile.populated_count());
        profile
    }

    pub fn get_stats(&self) -> EngineStats {
        EngineStats {
            stop_words: self.vocabulary.stop_words.len(),
            known_skills: self.vocabulary.skills.len(),
            extraction_rules: self.extractor.rule_names().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VocabularyConfig;

    #[test]
    fn test_rejects_missing_input() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();

        for (resume, job) in [("", "Rust developer"), ("Rust developer", "  \n"), ("", "")] {
            let err = engine.analyze_alignment(resume, job).unwrap_err();
            assert!(matches!(err, ResumeMatcherError::InvalidInput(ref msg) if msg == MISSING_INPUT_MESSAGE));
        }
    }

    #[test]
    fn test_analyze_alignment() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let text = "Platform engineer: Kubernetes, Terraform, observability";

        let result = engine.analyze_alignment(text, text).unwrap();
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_config_limits_flow_through() {
        let mut config = Config::default();
        config.scoring.max_missing_keywords = 2;
        config.scoring.max_weaknesses = 1;
        let engine = AnalysisEngine::new(&config).unwrap();

        let result = engine
            .analyze_alignment("unrelated", "alpha bravo charlie delta")
            .unwrap();
        assert_eq!(result.missing_keywords, vec!["alpha", "bravo"]);
        assert_eq!(result.weaknesses, vec!["Missing: alpha"]);
    }

    #[test]
    fn test_extra_vocabulary_from_config() {
        let config = Config {
            vocabulary: VocabularyConfig {
                extra_stop_words: vec!["startup".to_string()],
                extra_skills: vec!["Rust".to_string()],
            },
            ..Default::default()
        };
        let engine = AnalysisEngine::new(&config).unwrap();

        let profile = engine.extract_profile("Shipping Rust at a startup");
        assert_eq!(profile.skills, vec!["Rust"]);

        let result = engine.analyze_alignment("rust", "startup rust").unwrap();
        assert_eq!(result.score, 100);

        let stats = engine.get_stats();
        assert_eq!(stats.extraction_rules, 10);
        assert!(stats.known_skills > 30);
    }

    #[test]
    fn test_extract_profile_accepts_empty_text() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        assert!(engine.extract_profile("").is_empty());
    }
}
