//! Gap detection: which job keywords the résumé never mentions.
//!
//! The whole record is flattened to one lower-cased blob and searched by
//! substring, so a keyword counts as present wherever it appears: skills,
//! achievements, titles, even inside an unrelated word or a date. That
//! imprecision is accepted in exchange for not tracking which fields are
//! keyword-eligible as the record grows.

use serde_json::Value;

use super::AnalysisError;
use crate::models::resume::ResumeRecord;

/// Returns the keywords from `job_keywords` absent from the résumé, in input order.
pub fn find_missing_keywords(
    resume: &ResumeRecord,
    job_keywords: &[String],
) -> Result<Vec<String>, AnalysisError> {
    if job_keywords.is_empty() {
        return Ok(vec![]);
    }

    let text = resume_text(resume)?;

    Ok(job_keywords
        .iter()
        .filter(|keyword| !text.contains(&keyword.to_lowercase()))
        .cloned()
        .collect())
}

/// Every field value of the record, lower-cased, one value per line.
/// Field names are not included.
pub fn resume_text(resume: &ResumeRecord) -> Result<String, AnalysisError> {
    let value = serde_json::to_value(resume)?;
    let mut parts = Vec::new();
    collect_values(&value, &mut parts);
    Ok(parts.join("\n").to_lowercase())
}

fn collect_values(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push(b.to_string()),
        Value::Number(n) => out.push(n.to_string()),
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|v| collect_values(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_values(v, out)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::test_support::{complete_resume, empty_resume};

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_no_job_keywords_means_no_gaps() {
        assert!(find_missing_keywords(&empty_resume(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_keyword_in_skills_is_present() {
        let mut resume = empty_resume();
        resume.skills.push(crate::models::resume::SkillEntry {
            name: "JavaScript".to_string(),
            category: "Languages".to_string(),
            level: 4,
            ..Default::default()
        });

        let missing = find_missing_keywords(&resume, &kws(&["javascript", "react"])).unwrap();
        assert_eq!(missing, vec!["react"]);
    }

    #[test]
    fn test_keyword_in_achievement_is_present() {
        let mut resume = complete_resume();
        resume.experience[1].achievements.push("Migrated services to Kubernetes".to_string());

        let missing = find_missing_keywords(&resume, &kws(&["kubernetes"])).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_missing_keywords_keep_input_order() {
        let missing =
            find_missing_keywords(&empty_resume(), &kws(&["tensorflow", "docker", "jira"])).unwrap();
        assert_eq!(missing, vec!["tensorflow", "docker", "jira"]);
    }

    #[test]
    fn test_field_names_are_not_searched() {
        // "startdate" and "achievements" are wire field names, not values.
        let missing =
            find_missing_keywords(&complete_resume(), &kws(&["startdate", "achievements"])).unwrap();
        assert_eq!(missing, vec!["startdate", "achievements"]);
    }

    #[test]
    fn test_keyword_inside_unrelated_value_counts_as_present() {
        let mut resume = empty_resume();
        resume.personal_info.location = "Sapporo".to_string();

        let missing = find_missing_keywords(&resume, &kws(&["sap"])).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_resume_text_is_lower_cased() {
        let text = resume_text(&complete_resume()).unwrap();
        assert!(!text.chars().any(|c| c.is_uppercase()));
    }
}
