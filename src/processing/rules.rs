//! Extraction rules: each one looks at raw resume text and proposes a
//! single profile field.

use crate::config::ExtractionConfig;
use crate::error::{Result, ResumeMatcherError};
use crate::processing::profile::FieldValue;
use crate::processing::tokenizer::is_word_char;
use crate::processing::vocabulary::{SectionHeaders, SectionKind, SkillVocabulary};
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?[0-9]{1,3}[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
        .expect("Invalid phone regex")
});

static LINKEDIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/[a-z0-9_-]+").expect("Invalid LinkedIn regex")
});

static GITHUB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)github\.com/[a-z0-9_-]+").expect("Invalid GitHub regex")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:https?://|www\.)[^\s,;()<>"']+"#).expect("Invalid URL regex")
});

/// A pure `text -> Option<field>` step of the extraction pipeline
pub trait ExtractionRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, text: &str) -> Option<FieldValue>;
}

pub struct EmailRule;

impl ExtractionRule for EmailRule {
    fn name(&self) -> &'static str {
        "email"
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        EMAIL_REGEX
            .find(text)
            .map(|m| FieldValue::Email(m.as_str().to_string()))
    }
}

/// Optional country code, optional parenthesised area code, `.`/`-`/space
/// separators
pub struct PhoneRule;

impl ExtractionRule for PhoneRule {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        PHONE_REGEX
            .find(text)
            .map(|m| FieldValue::Phone(m.as_str().trim().to_string()))
    }
}

/// Guesses the candidate's name from the top of the document.
///
/// The first short line with no `@`, no digits and no "resume" wins. This
/// is a heuristic; the result is only a suggestion for the user to review.
pub struct NameRule {
    scan_lines: usize,
    min_len: usize,
    max_len: usize,
}

impl NameRule {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            scan_lines: config.name_scan_lines,
            min_len: config.name_min_len,
            max_len: config.name_max_len,
        }
    }

    fn is_candidate(&self, line: &str) -> bool {
        let len = line.graphemes(true).count();
        len >= self.min_len
            && len <= self.max_len
            && !line.contains('@')
            && !line.to_lowercase().contains("resume")
            && !line.chars().any(|c| c.is_ascii_digit())
    }
}

impl Default for NameRule {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl ExtractionRule for NameRule {
    fn name(&self) -> &'static str {
        "name"
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(self.scan_lines)
            .find(|line| self.is_candidate(line))
            .map(|line| FieldValue::Name(line.to_string()))
    }
}

pub struct LinkedInRule;

impl ExtractionRule for LinkedInRule {
    fn name(&self) -> &'static str {
        "linkedin"
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        LINKEDIN_REGEX
            .find(text)
            .map(|m| FieldValue::LinkedIn(format!("https://{}", m.as_str())))
    }
}

pub struct GitHubRule;

impl ExtractionRule for GitHubRule {
    fn name(&self) -> &'static str {
        "github"
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        GITHUB_REGEX
            .find(text)
            .map(|m| FieldValue::GitHub(format!("https://{}", m.as_str())))
    }
}

/// First generic URL not already claimed by the LinkedIn or GitHub rules
pub struct PortfolioRule;

impl ExtractionRule for PortfolioRule {
    fn name(&self) -> &'static str {
        "portfolio"
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        URL_REGEX
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches(['.', ':', '!', '?']))
            .find(|url| !LINKEDIN_REGEX.is_match(url) && !GITHUB_REGEX.is_match(url))
            .map(|url| FieldValue::Portfolio(with_scheme(url)))
    }
}

fn with_scheme(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Known skills mentioned in the text, in vocabulary order.
///
/// A hit only counts when it is not glued to surrounding word characters,
/// so "Java" inside "JavaScript" or "SQL" inside "PostgreSQL" is ignored.
pub struct SkillsRule {
    skills: Vec<String>,
    matcher: AhoCorasick,
}

impl SkillsRule {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self> {
        let skills = vocabulary.as_slice().to_vec();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&skills)
            .map_err(|e| ResumeMatcherError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { skills, matcher })
    }
}

impl ExtractionRule for SkillsRule {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        let mut found = vec![false; self.skills.len()];

        for mat in self.matcher.find_overlapping_iter(text) {
            if is_standalone(text, mat.start(), mat.end()) {
                found[mat.pattern().as_usize()] = true;
            }
        }

        let skills: Vec<String> = self
            .skills
            .iter()
            .zip(found)
            .filter(|(_, hit)| *hit)
            .map(|(skill, _)| skill.clone())
            .collect();

        if skills.is_empty() {
            None
        } else {
            Some(FieldValue::Skills(skills))
        }
    }
}

fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let before = text.get(..start).and_then(|s| s.chars().next_back());
    let after = text.get(end..).and_then(|s| s.chars().next());

    let clean_before = before.map_or(true, |c| !is_word_char(c));
    let clean_after = after.map_or(true, |c| !is_word_char(c) && c != '+' && c != '#');
    clean_before && clean_after
}

/// Text between a section header and the next header of any section.
///
/// The section starts at the earliest occurrence of one of its own header
/// words. It ends at the nearest later occurrence of any known header word,
/// its own included. Non-standard headers or ordering can mis-bound it.
pub struct SectionRule {
    kind: SectionKind,
    own_headers: Vec<String>,
    boundary_headers: Vec<String>,
}

impl SectionRule {
    pub fn new(kind: SectionKind, headers: &SectionHeaders) -> Self {
        Self {
            kind,
            own_headers: headers.synonyms(kind).to_vec(),
            boundary_headers: headers.all_synonyms().map(str::to_string).collect(),
        }
    }
}

impl ExtractionRule for SectionRule {
    fn name(&self) -> &'static str {
        match self.kind {
            SectionKind::Summary => "bio",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills-section",
            SectionKind::Projects => "projects-section",
            SectionKind::Certifications => "certifications-section",
        }
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        // ASCII lowering keeps byte offsets aligned with `text`
        let lower = text.to_ascii_lowercase();

        let (start, header) = self
            .own_headers
            .iter()
            .filter_map(|h| lower.find(h.as_str()).map(|pos| (pos, h)))
            .min_by_key(|(pos, _)| *pos)?;

        let body_start = start + header.len();
        let rest = lower.get(body_start..)?;
        let body_end = self
            .boundary_headers
            .iter()
            .filter_map(|h| rest.find(h.as_str()))
            .min()
            .map_or(text.len(), |offset| body_start + offset);

        let body = text
            .get(body_start..body_end)?
            .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
            .trim_end();

        if body.is_empty() {
            None
        } else {
            Some(FieldValue::Section(self.kind, body.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(kind: SectionKind, text: &str) -> Option<String> {
        match SectionRule::new(kind, &SectionHeaders::default()).extract(text) {
            Some(FieldValue::Section(_, body)) => Some(body),
            _ => None,
        }
    }

    #[test]
    fn test_email_rule() {
        let value = EmailRule.extract("Contact: jane.doe+jobs@mail.example.org today");
        assert_eq!(value, Some(FieldValue::Email("jane.doe+jobs@mail.example.org".to_string())));
        assert_eq!(EmailRule.extract("no address here"), None);
    }

    #[test]
    fn test_phone_rule_formats() {
        for phone in ["555-123-4567", "(555) 123-4567", "+1 555.123.4567", "5551234567"] {
            let text = format!("Phone: {}\n", phone);
            assert_eq!(
                PhoneRule.extract(&text),
                Some(FieldValue::Phone(phone.to_string())),
                "failed for {}",
                phone
            );
        }
        assert_eq!(PhoneRule.extract("Class of 2019"), None);
    }

    #[test]
    fn test_name_rule() {
        let rule = NameRule::default();
        let text = "\n  RESUME  \njane@doe.dev\nJane Doe\nSoftware Engineer";
        assert_eq!(rule.extract(text), Some(FieldValue::Name("Jane Doe".to_string())));
    }

    #[test]
    fn test_name_rule_rejects_digits_and_length() {
        let rule = NameRule::default();
        assert_eq!(rule.extract("Bob\n221B Baker Street"), None);

        let long = "A".repeat(40);
        assert_eq!(rule.extract(&long), None);
        let max = "A".repeat(39);
        assert_eq!(rule.extract(&max), Some(FieldValue::Name(max.clone())));
    }

    #[test]
    fn test_name_rule_only_scans_leading_lines() {
        let rule = NameRule::default();
        let mut text = "1\n".repeat(10);
        text.push_str("Late Name");
        assert_eq!(rule.extract(&text), None);
    }

    #[test]
    fn test_profile_links() {
        let text = "https://www.linkedin.com/in/jane-doe | github.com/janedoe/dotfiles | www.janedoe.dev.";

        assert_eq!(
            LinkedInRule.extract(text),
            Some(FieldValue::LinkedIn("https://linkedin.com/in/jane-doe".to_string()))
        );
        assert_eq!(
            GitHubRule.extract(text),
            Some(FieldValue::GitHub("https://github.com/janedoe".to_string()))
        );
        assert_eq!(
            PortfolioRule.extract(text),
            Some(FieldValue::Portfolio("https://www.janedoe.dev".to_string()))
        );
    }

    #[test]
    fn test_portfolio_keeps_existing_scheme() {
        let text = "Portfolio: http://janedoe.dev/work";
        assert_eq!(
            PortfolioRule.extract(text),
            Some(FieldValue::Portfolio("http://janedoe.dev/work".to_string()))
        );
        assert_eq!(PortfolioRule.extract("https://github.com/janedoe"), None);
    }

    #[test]
    fn test_skills_rule_word_boundaries() {
        let rule = SkillsRule::new(&SkillVocabulary::default()).unwrap();
        let text = "Built SPAs in JavaScript and TypeScript on PostgreSQL; some c++ and GitHub Actions.";

        let skills = match rule.extract(text) {
            Some(FieldValue::Skills(skills)) => skills,
            other => panic!("unexpected {:?}", other),
        };

        assert_eq!(skills, vec!["JavaScript", "TypeScript", "C++", "PostgreSQL"]);
    }

    #[test]
    fn test_skills_rule_preserves_vocabulary_order() {
        let rule = SkillsRule::new(&SkillVocabulary::new(["Linux", "Docker", "Java"])).unwrap();
        let value = rule.extract("java services in docker containers on linux");

        assert_eq!(
            value,
            Some(FieldValue::Skills(vec![
                "Linux".to_string(),
                "Docker".to_string(),
                "Java".to_string()
            ]))
        );
        assert_eq!(rule.extract("nothing known"), None);
    }

    #[test]
    fn test_section_boundaries() {
        let text = "Jane Doe\nSummary\nBackend engineer.\nExperience:\nAcme Corp 2019-2023\nEducation\nBSc Computer Science\nSkills\nRust";

        assert_eq!(section(SectionKind::Summary, text).as_deref(), Some("Backend engineer."));
        assert_eq!(section(SectionKind::Experience, text).as_deref(), Some("Acme Corp 2019-2023"));
        assert_eq!(section(SectionKind::Education, text).as_deref(), Some("BSc Computer Science"));
    }

    #[test]
    fn test_section_ends_at_repeated_own_header() {
        let text = "Employment\nAcme, 3 years of experience with Go";
        assert_eq!(section(SectionKind::Experience, text).as_deref(), Some("Acme, 3 years of"));
    }

    #[test]
    fn test_section_missing_header() {
        assert_eq!(section(SectionKind::Education, "Jane Doe\nRust developer"), None);
    }

    #[test]
    fn test_section_body_is_source_substring() {
        let text = "ÉDUCATION - Université\nEDUCATION\nÉcole Polytechnique";
        let body = section(SectionKind::Education, text).unwrap();
        assert_eq!(body, "École Polytechnique");
        assert!(text.contains(&body));
    }
}
