//! Keyword scoring and profile extraction

pub mod vocabulary;
pub mod tokenizer;
pub mod keyword_matcher;
pub mod profile;
pub mod rules;
pub mod extractor;
pub mod analyzer;
