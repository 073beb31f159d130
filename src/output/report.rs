//! Report structures wrapping analysis and extraction results

use crate::processing::keyword_matcher::MatchResult;
use crate::processing::profile::ProfileFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Keyword match result plus where the inputs came from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub resume_source: String,
    pub job_source: String,
    pub generated_at: DateTime<Utc>,
    pub result: MatchResult,
}

/// Extracted profile suggestions for one resume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub profile: ProfileFields,
}

impl AnalysisReport {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>, result: MatchResult) -> Self {
        Self {
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            generated_at: Utc::now(),
            result,
        }
    }
}

impl ProfileReport {
    pub fn new(source: impl Into<String>, profile: ProfileFields) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            profile,
        }
    }
}
