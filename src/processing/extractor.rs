//! Resume field extraction pipeline

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::processing::profile::ProfileFields;
use crate::processing::rules::{
    EmailRule, ExtractionRule, GitHubRule, LinkedInRule, NameRule, PhoneRule, PortfolioRule,
    SectionRule, SkillsRule,
};
use crate::processing::vocabulary::{SectionKind, Vocabulary};
use log::debug;

/// Runs a fixed sequence of [`ExtractionRule`]s over resume text
pub struct ProfileExtractor {
    rules: Vec<Box<dyn ExtractionRule>>,
}

impl ProfileExtractor {
    pub fn new(rules: Vec<Box<dyn ExtractionRule>>) -> Self {
        Self { rules }
    }

    /// The standard pipeline: contact fields, links, skills, then sections
    pub fn from_vocabulary(vocabulary: &Vocabulary, config: &ExtractionConfig) -> Result<Self> {
        let mut rules: Vec<Box<dyn ExtractionRule>> = vec![
            Box::new(EmailRule),
            Box::new(PhoneRule),
            Box::new(NameRule::new(config)),
            Box::new(LinkedInRule),
            Box::new(GitHubRule),
            Box::new(PortfolioRule),
            Box::new(SkillsRule::new(&vocabulary.skills)?),
        ];

        for kind in SectionKind::TARGETS {
            rules.push(Box::new(SectionRule::new(kind, &vocabulary.section_headers)));
        }

        Ok(Self::new(rules))
    }

    /// Never fails; fields with no evidence stay empty
    pub fn extract(&self, text: &str) -> ProfileFields {
        let mut profile = ProfileFields::default();

        for rule in &self.rules {
            if let Some(value) = rule.extract(text) {
                debug!("Rule '{}' produced a value", rule.name());
                profile.apply(value);
            }
        }

        profile
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::from_vocabulary(&Vocabulary::default(), &ExtractionConfig::default())
            .expect("Failed to create default profile extractor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::profile::FieldValue;

    const SAMPLE: &str = "Jane Doe
jane.doe@example.com | +1 (555) 987-6543
linkedin.com/in/janedoe | github.com/janedoe | https://janedoe.dev

Summary
Full-stack engineer who enjoys shipping.

Experience
Acme Corp - Senior Engineer (2019-2024)
Built React and Node.js services on AWS with Docker.

Education
B.S. Computer Science, State University

Skills
TypeScript, Python, Git, Linux";

    #[test]
    fn test_full_pipeline() {
        let extractor = ProfileExtractor::default();
        let profile = extractor.extract(SAMPLE);

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane.doe@example.com");
        assert_eq!(profile.phone, "+1 (555) 987-6543");
        assert_eq!(profile.linkedin, "https://linkedin.com/in/janedoe");
        assert_eq!(profile.github, "https://github.com/janedoe");
        assert_eq!(profile.portfolio, "https://janedoe.dev");
        assert_eq!(profile.bio, "Full-stack engineer who enjoys shipping.");
        assert!(profile.experience.starts_with("Acme Corp - Senior Engineer"));
        assert!(profile.experience.ends_with("with Docker."));
        assert_eq!(profile.education, "B.S. Computer Science, State University");
        assert_eq!(
            profile.skills,
            vec!["React", "Node.js", "TypeScript", "Python", "AWS", "Docker", "Git", "Linux"]
        );
    }

    #[test]
    fn test_contact_only_resume() {
        let extractor = ProfileExtractor::default();
        let profile =
            extractor.extract("John Smith\njohn@example.com\n555-123-4567\nlinkedin.com/in/johnsmith");

        assert_eq!(profile.email, "john@example.com");
        assert_eq!(profile.phone, "555-123-4567");
        assert_eq!(profile.linkedin, "https://linkedin.com/in/johnsmith");
        assert_eq!(profile.name, "John Smith");
        assert!(profile.github.is_empty());
        assert!(profile.portfolio.is_empty());
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_empty_text_gives_empty_profile() {
        let extractor = ProfileExtractor::default();
        assert_eq!(extractor.extract(""), ProfileFields::default());
    }

    #[test]
    fn test_values_come_from_source_text() {
        let extractor = ProfileExtractor::default();
        let profile = extractor.extract(SAMPLE);

        for value in [
            &profile.email,
            &profile.phone,
            &profile.name,
            &profile.bio,
            &profile.experience,
            &profile.education,
        ] {
            assert!(SAMPLE.contains(value.as_str()), "{:?} not in source", value);
        }
        for url in [&profile.linkedin, &profile.github, &profile.portfolio] {
            assert!(url.starts_with("https://") || url.starts_with("http://"));
        }
    }

    #[test]
    fn test_custom_rule_pipeline() {
        struct Constant;

        impl ExtractionRule for Constant {
            fn name(&self) -> &'static str {
                "constant"
            }

            fn extract(&self, _text: &str) -> Option<FieldValue> {
                Some(FieldValue::Name("Fixed".to_string()))
            }
        }

        let rules: Vec<Box<dyn ExtractionRule>> = vec![Box::new(EmailRule), Box::new(Constant)];
        let extractor = ProfileExtractor::new(rules);
        let profile = extractor.extract("x@y.io");

        assert_eq!(extractor.rule_names(), vec!["email", "constant"]);
        assert_eq!(profile.name, "Fixed");
        assert_eq!(profile.email, "x@y.io");
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_default_rule_order() {
        let extractor = ProfileExtractor::default();
        assert_eq!(
            extractor.rule_names(),
            vec![
                "email", "phone", "name", "linkedin", "github", "portfolio", "skills", "bio",
                "experience", "education"
            ]
        );
    }
}
