use serde::{Deserialize, Serialize};

use crate::ats::AnalysisError;

/// Structured résumé snapshot handed over by the editing UI.
///
/// The five core sections are required: a record missing any of them fails to
/// deserialize instead of being scored against silent defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    /// `None` while the position is current.
    #[serde(default)]
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

impl ExperienceEntry {
    /// Company, position and start date are all filled in.
    pub fn has_required_fields(&self) -> bool {
        !self.company.is_empty() && !self.position.is_empty() && !self.start_date.is_empty()
    }

    /// Every field the completeness bonus looks at is filled in, including at
    /// least one non-empty achievement.
    pub fn is_complete(&self) -> bool {
        self.has_required_fields()
            && (self.current || has_text(&self.end_date))
            && !self.description.is_empty()
            && self.achievements.iter().any(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl EducationEntry {
    pub fn has_required_fields(&self) -> bool {
        !self.institution.is_empty() && !self.degree.is_empty() && !self.start_date.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.has_required_fields()
            && !self.field.is_empty()
            && (self.current || has_text(&self.end_date))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    /// Self-assessed proficiency, 1 (novice) to 5 (expert).
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

pub const SKILL_LEVEL_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

impl ResumeRecord {
    /// Rejects records whose values fall outside what the editing UI can produce.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if let Some((index, skill)) = self
            .skills
            .iter()
            .enumerate()
            .find(|(_, s)| !SKILL_LEVEL_RANGE.contains(&s.level))
        {
            return Err(AnalysisError::InvalidResume(format!(
                "skills[{index}] '{}' has level {}, expected 1-5",
                skill.name, skill.level
            )));
        }
        Ok(())
    }

    /// All six personal-info fields the score rewards are filled in.
    pub fn has_complete_personal_info(&self) -> bool {
        let p = &self.personal_info;
        [
            &p.first_name,
            &p.last_name,
            &p.email,
            &p.phone,
            &p.location,
            &p.title,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
