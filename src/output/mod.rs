//! Report structures and output formatting

pub mod formatter;
pub mod report;

pub use formatter::ReportGenerator;
pub use report::{AnalysisReport, ProfileReport};
