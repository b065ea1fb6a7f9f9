//! Formatting audit: structural completeness of the résumé, independent of any job.

use crate::models::resume::ResumeRecord;

pub const SUMMARY_MIN_CHARS: usize = 50;
pub const SUMMARY_MAX_CHARS: usize = 500;
pub const MIN_SKILLS: usize = 5;

pub const MISSING_CONTACT: &str = "Missing contact information (email or phone).";
pub const MISSING_SUMMARY: &str = "Missing professional summary section.";
pub const SUMMARY_TOO_SHORT: &str =
    "Professional summary is too short, aim for 3-5 impactful sentences.";
pub const SUMMARY_TOO_LONG: &str = "Professional summary is too long, keep it concise.";
pub const NO_EXPERIENCE: &str = "No work experience entries found.";
pub const INCOMPLETE_EXPERIENCE: &str = "Some work experience entries have missing information.";
pub const NO_EDUCATION: &str = "No education entries found.";
pub const INCOMPLETE_EDUCATION: &str = "Some education entries have missing information.";
pub const NO_SKILLS: &str = "No skills listed. Add relevant technical and soft skills.";
pub const FEW_SKILLS: &str = "Consider adding more skills (aim for at least 8-12 relevant skills).";

/// Returns structural issues in rule order: contact, summary, experience,
/// education, skills. Each rule contributes at most one message.
pub fn check_formatting_issues(resume: &ResumeRecord) -> Vec<String> {
    let mut issues = Vec::new();

    let personal = &resume.personal_info;
    if personal.email.is_empty() || personal.phone.is_empty() {
        issues.push(MISSING_CONTACT);
    }

    let summary_len = resume.summary.chars().count();
    if resume.summary.is_empty() {
        issues.push(MISSING_SUMMARY);
    } else if summary_len < SUMMARY_MIN_CHARS {
        issues.push(SUMMARY_TOO_SHORT);
    } else if summary_len > SUMMARY_MAX_CHARS {
        issues.push(SUMMARY_TOO_LONG);
    }

    if resume.experience.is_empty() {
        issues.push(NO_EXPERIENCE);
    } else if resume.experience.iter().any(|e| !e.has_required_fields()) {
        issues.push(INCOMPLETE_EXPERIENCE);
    }

    if resume.education.is_empty() {
        issues.push(NO_EDUCATION);
    } else if resume.education.iter().any(|e| !e.has_required_fields()) {
        issues.push(INCOMPLETE_EDUCATION);
    }

    if resume.skills.is_empty() {
        issues.push(NO_SKILLS);
    } else if resume.skills.len() < MIN_SKILLS {
        issues.push(FEW_SKILLS);
    }

    issues.into_iter().map(String::from).collect()
}
