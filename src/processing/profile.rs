//! Profile fields pulled out of resume text

use crate::processing::vocabulary::SectionKind;
use serde::{Deserialize, Serialize};

/// Best-effort suggestions for a profile form. Every value is either empty
/// or taken from the source text (URLs may gain a scheme).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub email: String,
    pub phone: String,
    pub name: String,
    pub skills: Vec<String>,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub bio: String,
    pub experience: String,
    pub education: String,
}

/// One extracted value, tagged with the field it fills
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Email(String),
    Phone(String),
    Name(String),
    Skills(Vec<String>),
    LinkedIn(String),
    GitHub(String),
    Portfolio(String),
    Section(SectionKind, String),
}

impl ProfileFields {
    pub fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::Email(v) => self.email = v,
            FieldValue::Phone(v) => self.phone = v,
            FieldValue::Name(v) => self.name = v,
            FieldValue::Skills(v) => self.skills = v,
            FieldValue::LinkedIn(v) => self.linkedin = v,
            FieldValue::GitHub(v) => self.github = v,
            FieldValue::Portfolio(v) => self.portfolio = v,
            FieldValue::Section(SectionKind::Summary, v) => self.bio = v,
            FieldValue::Section(SectionKind::Experience, v) => self.experience = v,
            FieldValue::Section(SectionKind::Education, v) => self.education = v,
            // Boundary-only sections have no profile slot
            FieldValue::Section(_, _) => {}
        }
    }

    /// Skills as the comma-separated line the profile form stores
    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }

    pub fn populated_count(&self) -> usize {
        let text_fields = [
            &self.email,
            &self.phone,
            &self.name,
            &self.linkedin,
            &self.github,
            &self.portfolio,
            &self.bio,
            &self.experience,
            &self.education,
        ];
        text_fields.iter().filter(|f| !f.is_empty()).count() + usize::from(!self.skills.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }

    /// Contact details in display order, skipping empty ones
    pub fn contact_items(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.linkedin, &self.github, &self.portfolio]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
