//! Word lists that drive scoring and extraction
//!
//! Nothing here is global state: a [`Vocabulary`] is built once (usually from
//! [`VocabularyConfig`]) and handed to the tokenizer and the extractor, so
//! tests can swap in their own lists.

use crate::config::VocabularyConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Common English function words plus terms that appear in nearly every
/// posting or resume and so carry no matching signal.
const DEFAULT_STOP_WORDS: &[&str] = &[
    // Articles, conjunctions, prepositions
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "as", "if", "than", "then", "so",
    // Auxiliaries and modals
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must",
    // Pronouns and determiners
    "that", "this", "these", "those", "it", "its", "he", "she", "they", "we",
    "you", "i", "me", "my", "your", "his", "her", "their", "our", "us",
    // Question words and fillers
    "when", "where", "why", "how", "what", "who", "which", "not", "no", "yes",
    "too", "very", "just", "now",
    // Recruiting boilerplate
    "job", "description", "resume", "experience", "work", "years", "skills",
    "requirements", "qualifications", "responsibilities", "role", "position",
    "candidate", "applicant", "company", "team", "business", "project",
    "projects", "etc", "eg", "ie",
];

/// Skills offered for profile tagging; extraction reports them in this order.
const DEFAULT_SKILLS: &[&str] = &[
    "HTML", "CSS", "React", "Node.js", "JavaScript", "TypeScript", "Java",
    "Python", "C++", "C#", "MongoDB", "SQL", "PostgreSQL", "Firebase",
    "AWS", "Docker", "Git", "TensorFlow", "DSA", "Data Analysis",
    "Machine Learning", "Next.js", "Vue.js", "Angular", "Express.js",
    "Redux", "Tailwind CSS", "SASS", "GraphQL", "Linux",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl SectionKind {
    /// Sections whose text is copied into the profile
    pub const TARGETS: [SectionKind; 3] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
    ];

    fn default_headers(self) -> &'static [&'static str] {
        match self {
            SectionKind::Summary => &["summary", "profile", "about me", "objective"],
            SectionKind::Experience => &["experience", "work history", "employment"],
            SectionKind::Education => &["education", "academic", "qualifications"],
            SectionKind::Skills => &["skills", "technical skills", "competencies"],
            SectionKind::Projects => &["projects"],
            SectionKind::Certifications => &["certifications", "certificates"],
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SectionKind::Summary => write!(f, "Summary"),
            SectionKind::Experience => write!(f, "Experience"),
            SectionKind::Education => write!(f, "Education"),
            SectionKind::Skills => write!(f, "Skills"),
            SectionKind::Projects => write!(f, "Projects"),
            SectionKind::Certifications => write!(f, "Certifications"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// Keeps the first spelling of each skill (compared case-insensitively)
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
            .collect();
        Self { skills }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

/// Lower-case header synonyms per section, in lookup order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeaders {
    headers: Vec<(SectionKind, Vec<String>)>,
}

impl SectionHeaders {
    pub fn new(headers: Vec<(SectionKind, Vec<String>)>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(kind, words)| {
                let words = words
                    .into_iter()
                    .map(|w| w.trim().to_ascii_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect();
                (kind, words)
            })
            .collect();
        Self { headers }
    }

    pub fn synonyms(&self, kind: SectionKind) -> &[String] {
        self.headers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    /// Every synonym of every section; any of them ends a section
    pub fn all_synonyms(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .flat_map(|(_, words)| words.iter().map(String::as_str))
    }
}

impl Default for SectionHeaders {
    fn default() -> Self {
        let kinds = [
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
            SectionKind::Projects,
            SectionKind::Certifications,
        ];
        Self::new(
            kinds
                .iter()
                .map(|&kind| {
                    let words = kind.default_headers().iter().map(|s| s.to_string()).collect();
                    (kind, words)
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub stop_words: StopWords,
    pub skills: SkillVocabulary,
    pub section_headers: SectionHeaders,
}

impl Vocabulary {
    pub fn from_config(config: &VocabularyConfig) -> Self {
        let stop_words = StopWords::new(
            DEFAULT_STOP_WORDS
                .iter()
                .map(|s| s.to_string())
                .chain(config.extra_stop_words.iter().cloned()),
        );
        let skills = SkillVocabulary::new(
            DEFAULT_SKILLS
                .iter()
                .map(|s| s.to_string())
                .chain(config.extra_skills.iter().cloned()),
        );

        Self {
            stop_words,
            skills,
            section_headers: SectionHeaders::default(),
        }
    }
}
