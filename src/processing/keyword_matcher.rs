//! ATS-style keyword matching between a resume and a job description

use crate::config::Config;
use crate::processing::tokenizer::Tokenizer;
use crate::processing::vocabulary::Vocabulary;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores a resume by the share of job-description keywords it contains
pub struct KeywordMatcher {
    tokenizer: Tokenizer,
    limits: MatchLimits,
    thresholds: BandThresholds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Percentage of job keywords present in the resume (0-100)
    pub score: u8,
    pub band: MatchBand,
    pub matched_keywords: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub summary: String,
    pub improvement_tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

/// Caps applied to the keyword lists in a [`MatchResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    pub max_matched: usize,
    pub max_weaknesses: usize,
    pub max_missing: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandThresholds {
    pub strong: u8,
    pub moderate: u8,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            max_matched: 15,
            max_weaknesses: 5,
            max_missing: 20,
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            strong: 70,
            moderate: 40,
        }
    }
}

impl MatchBand {
    pub fn from_score(score: u8, thresholds: BandThresholds) -> Self {
        if score >= thresholds.strong {
            MatchBand::Strong
        } else if score >= thresholds.moderate {
            MatchBand::Moderate
        } else {
            MatchBand::Weak
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            MatchBand::Strong => "Excellent match! Your resume contains a high percentage of the keywords found in the job description.",
            MatchBand::Moderate => "Good match. You have a solid foundation, but some key qualifications might be missing or phrased differently.",
            MatchBand::Weak => "Low match. There seems to be a significant gap between your resume and the job description keywords.",
        }
    }

    pub fn improvement_tips(&self) -> &'static [&'static str] {
        match self {
            MatchBand::Strong => &[
                "Prepare for behavioral interview questions.",
                "Highlight specific achievements related to the matched skills.",
            ],
            MatchBand::Moderate => &[
                "Try to incorporate more specific keywords from the job description.",
                "Review the missing keywords list and see if you have those skills.",
            ],
            MatchBand::Weak => &[
                "Tailor your resume specifically for this role.",
                "Ensure you are using the exact terminology found in the job description.",
            ],
        }
    }
}

impl fmt::Display for MatchBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchBand::Strong => write!(f, "Strong"),
            MatchBand::Moderate => write!(f, "Moderate"),
            MatchBand::Weak => write!(f, "Weak"),
        }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(
            Tokenizer::default(),
            MatchLimits::default(),
            BandThresholds::default(),
        )
    }
}

impl KeywordMatcher {
    pub fn new(tokenizer: Tokenizer, limits: MatchLimits, thresholds: BandThresholds) -> Self {
        Self {
            tokenizer,
            limits,
            thresholds,
        }
    }

    pub fn from_config(config: &Config, vocabulary: &Vocabulary) -> Self {
        let scoring = &config.scoring;
        Self::new(
            Tokenizer::new(vocabulary.stop_words.clone(), scoring.min_token_len),
            MatchLimits {
                max_matched: scoring.max_matched_keywords,
                max_weaknesses: scoring.max_weaknesses,
                max_missing: scoring.max_missing_keywords,
            },
            BandThresholds {
                strong: scoring.strong_threshold,
                moderate: scoring.moderate_threshold,
            },
        )
    }

    /// Compare a resume against a job description.
    ///
    /// Every distinct job keyword counts once, whether or not it repeats.
    /// An empty keyword set scores 0. Input validation is the caller's job.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> MatchResult {
        let job_tokens = self.tokenizer.token_set(job_text);
        let resume_tokens = self.tokenizer.token_set(resume_text);

        let (matched, missing): (Vec<&str>, Vec<&str>) = job_tokens
            .iter()
            .partition(|token| resume_tokens.contains(token));

        let score = percentage(matched.len(), job_tokens.len());
        let band = MatchBand::from_score(score, self.thresholds);

        debug!(
            "Keyword match: {}/{} job keywords found ({}%, {})",
            matched.len(),
            job_tokens.len(),
            score,
            band
        );

        MatchResult {
            score,
            band,
            matched_keywords: take_owned(&matched, self.limits.max_matched),
            weaknesses: missing
                .iter()
                .take(self.limits.max_weaknesses)
                .map(|keyword| format!("Missing: {}", keyword))
                .collect(),
            missing_keywords: take_owned(&missing, self.limits.max_missing),
            summary: band.summary().to_string(),
            improvement_tips: band.improvement_tips().iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u8
}

fn take_owned(keywords: &[&str], limit: usize) -> Vec<String> {
    keywords.iter().take(limit).map(|k| k.to_string()).collect()
}
