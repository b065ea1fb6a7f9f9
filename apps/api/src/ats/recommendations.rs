//! Recommendations: actionable suggestions derived from keyword gaps,
//! short descriptions and unquantified achievements.

use crate::models::resume::ResumeRecord;

pub const DESCRIPTION_MIN_CHARS: usize = 50;
pub const MAX_SUGGESTED_KEYWORDS: usize = 3;

pub const WEAVE_INTO_SUMMARY: &str =
    "Consider adding some of the missing keywords to your professional summary.";
pub const EXPAND_DESCRIPTIONS: &str =
    "Expand your experience descriptions to include more relevant keywords and achievements.";
pub const ADD_MISSING_SKILLS_PREFIX: &str =
    "Add missing skills that are relevant to the job description, especially: ";
pub const QUANTIFY_ACHIEVEMENTS: &str =
    "Add quantifiable achievements with metrics to your experience section.";
pub const USE_ACTION_VERBS: &str = "Use action verbs at the beginning of your bullet points.";
pub const TAILOR_TO_JOB: &str = "Tailor your resume to match the specific job requirements.";

/// Outcome verbs that read as measurable impact even without a number.
const IMPACT_VERBS: &[&str] = &[
    "increased",
    "decreased",
    "reduced",
    "improved",
    "generated",
    "saved",
    "delivered",
];

/// Builds recommendations for a résumé given the job keywords it lacks.
/// Nothing is recommended when no keyword is missing.
pub fn generate_recommendations(resume: &ResumeRecord, missing_keywords: &[String]) -> Vec<String> {
    if missing_keywords.is_empty() {
        return vec![];
    }

    let mut recommendations = Vec::new();

    if !resume.summary.is_empty() {
        recommendations.push(WEAVE_INTO_SUMMARY.to_string());
    }

    if resume
        .experience
        .iter()
        .any(|e| e.description.chars().count() < DESCRIPTION_MIN_CHARS)
    {
        recommendations.push(EXPAND_DESCRIPTIONS.to_string());
    }

    let top: Vec<&str> = missing_keywords
        .iter()
        .take(MAX_SUGGESTED_KEYWORDS)
        .map(String::as_str)
        .collect();
    recommendations.push(format!("{ADD_MISSING_SKILLS_PREFIX}{}", top.join(", ")));

    let quantified = resume
        .experience
        .iter()
        .flat_map(|e| e.achievements.iter())
        .any(|a| has_quantifiable_impact(a));
    if !quantified {
        recommendations.push(QUANTIFY_ACHIEVEMENTS.to_string());
    }

    if recommendations.len() < 2 {
        recommendations.push(USE_ACTION_VERBS.to_string());
        recommendations.push(TAILOR_TO_JOB.to_string());
    }

    recommendations
}

/// Case-insensitive check for measurable impact.
///
/// PASS conditions:
/// - A digit immediately followed by `%` ("20%")
/// - A digit followed by ` percent` ("20 percent")
/// - Any outcome verb from `IMPACT_VERBS`, anywhere in the text
pub fn has_quantifiable_impact(text: &str) -> bool {
    let lower = text.to_lowercase();

    let has_percentage = lower.char_indices().any(|(i, c)| {
        if !c.is_ascii_digit() {
            return false;
        }
        let rest = &lower[i + c.len_utf8()..];
        rest.starts_with('%') || rest.starts_with(" percent")
    });

    has_percentage || IMPACT_VERBS.iter().any(|verb| lower.contains(verb))
}
