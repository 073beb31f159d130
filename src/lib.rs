//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, ResumeMatcherError};
pub use config::Config;
pub use processing::analyzer::AnalysisEngine;
pub use processing::keyword_matcher::MatchResult;
pub use processing::profile::ProfileFields;
