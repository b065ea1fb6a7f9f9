//! Analyzer: runs the engine stages in order and assembles one `AnalysisResult`.
//!
//! `Analyzer` is the synchronous entry point. `ResumeAnalyzer` is the async
//! seam `AppState` carries as `Arc<dyn ResumeAnalyzer>`; the default
//! implementation adds nothing beyond calling the synchronous path.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::catalog::KeywordCatalog;
use super::formatting::check_formatting_issues;
use super::gaps::find_missing_keywords;
use super::keywords::extract_keywords;
use super::recommendations::generate_recommendations;
use super::scoring::{score_breakdown, ScoreBreakdown};
use super::AnalysisError;
use crate::models::analysis::AnalysisResult;
use crate::models::resume::ResumeRecord;

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume: &ResumeRecord,
        job_description: &str,
    ) -> Result<AnalysisResult, AnalysisError>;

    async fn explain(
        &self,
        resume: &ResumeRecord,
        job_description: &str,
    ) -> Result<ScoreBreakdown, AnalysisError>;

    fn extract_keywords(&self, job_description: &str) -> Vec<String>;
}

/// Stateless apart from the shared, read-only keyword catalog.
#[derive(Debug, Clone)]
pub struct Analyzer {
    catalog: Arc<KeywordCatalog>,
}

/// Intermediate stage outputs, shared by `analyze_resume` and `explain`.
struct Stages {
    job_keywords: Vec<String>,
    missing_keywords: Vec<String>,
    formatting_issues: Vec<String>,
}

impl Analyzer {
    pub fn new(catalog: Arc<KeywordCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &KeywordCatalog {
        &self.catalog
    }

    /// Full analysis. Either every stage succeeds or an error is returned;
    /// no partial result is produced.
    pub fn analyze_resume(
        &self,
        resume: &ResumeRecord,
        job_description: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let stages = self.run_stages(resume, job_description)?;

        let recommendations = generate_recommendations(resume, &stages.missing_keywords);
        let score = score_breakdown(
            resume,
            &stages.job_keywords,
            &stages.missing_keywords,
            &stages.formatting_issues,
        )
        .total;

        let matched_keywords: Vec<String> = stages
            .job_keywords
            .iter()
            .filter(|k| !stages.missing_keywords.contains(k))
            .cloned()
            .collect();

        debug!(
            score,
            job_keywords = stages.job_keywords.len(),
            missing = stages.missing_keywords.len(),
            formatting_issues = stages.formatting_issues.len(),
            recommendations = recommendations.len(),
            "Resume analyzed"
        );

        Ok(AnalysisResult {
            score,
            matched_keywords,
            missing_keywords: stages.missing_keywords,
            recommendations,
            formatting_issues: stages.formatting_issues,
        })
    }

    /// Per-term breakdown of the score `analyze_resume` would return.
    pub fn explain_score(
        &self,
        resume: &ResumeRecord,
        job_description: &str,
    ) -> Result<ScoreBreakdown, AnalysisError> {
        let stages = self.run_stages(resume, job_description)?;
        Ok(score_breakdown(
            resume,
            &stages.job_keywords,
            &stages.missing_keywords,
            &stages.formatting_issues,
        ))
    }

    fn run_stages(
        &self,
        resume: &ResumeRecord,
        job_description: &str,
    ) -> Result<Stages, AnalysisError> {
        resume.validate()?;

        let job_keywords = extract_keywords(&self.catalog, job_description);
        let missing_keywords = find_missing_keywords(resume, &job_keywords)?;
        let formatting_issues = check_formatting_issues(resume);

        Ok(Stages {
            job_keywords,
            missing_keywords,
            formatting_issues,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Arc::new(KeywordCatalog::builtin()))
    }
}

#[async_trait]
impl ResumeAnalyzer for Analyzer {
    async fn analyze(
        &self,
        resume: &ResumeRecord,
        job_description: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_resume(resume, job_description)
    }

    async fn explain(
        &self,
        resume: &ResumeRecord,
        job_description: &str,
    ) -> Result<ScoreBreakdown, AnalysisError> {
        self.explain_score(resume, job_description)
    }

    fn extract_keywords(&self, job_description: &str) -> Vec<String> {
        extract_keywords(&self.catalog, job_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::catalog::KeywordGroup;
    use crate::ats::formatting::{MISSING_CONTACT, NO_EDUCATION, NO_EXPERIENCE, NO_SKILLS};
    use crate::ats::test_support::{complete_resume, empty_resume};
    use crate::models::resume::SkillEntry;

    fn web_analyzer() -> Analyzer {
        let catalog = KeywordCatalog::from_groups(vec![KeywordGroup {
            label: "web".to_string(),
            keywords: vec!["javascript".to_string(), "react".to_string()],
        }])
        .unwrap();
        Analyzer::new(Arc::new(catalog))
    }

    #[test]
    fn test_empty_job_description_scores_structure_only() {
        let analyzer = Analyzer::default();
        let resume = complete_resume();

        let result = analyzer.analyze_resume(&resume, "").unwrap();
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert!(result.recommendations.is_empty());
        assert!(result.formatting_issues.is_empty());
        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_half_matched_keywords() {
        let mut resume = complete_resume();
        resume.skills[0].name = "JavaScript".to_string();

        let result = web_analyzer()
            .analyze_resume(&resume, "We use JavaScript and React daily")
            .unwrap();
        assert_eq!(result.matched_keywords, vec!["javascript"]);
        assert_eq!(result.missing_keywords, vec!["react"]);
        // 70 + round(1/2 × 20) + completeness 10
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_bare_resume_gets_four_issues_in_order() {
        let result = web_analyzer()
            .analyze_resume(&empty_resume(), "javascript react")
            .unwrap();
        assert_eq!(
            result.formatting_issues,
            vec![MISSING_CONTACT, NO_EXPERIENCE, NO_EDUCATION, NO_SKILLS]
        );
        // 70 + 0 − 12 + vacuous education bonus
        assert_eq!(result.score, 59);
    }

    #[test]
    fn test_complete_resume_without_recognized_keywords_scores_80() {
        let result = web_analyzer()
            .analyze_resume(&complete_resume(), "Join a friendly team in Lisbon")
            .unwrap();
        assert!(result.formatting_issues.is_empty());
        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_matched_and_missing_partition_extracted_keywords() {
        let analyzer = Analyzer::default();
        let jd = "Full-stack role: React, TypeScript, Docker, Kubernetes, SQL, agile, \
                  Python and Tableau-free analytics. SEO a plus.";
        let mut resume = complete_resume();
        resume.skills[1].name = "Docker".to_string();

        let extracted = analyzer.extract_keywords(jd);
        let result = analyzer.analyze_resume(&resume, jd).unwrap();

        for kw in &result.matched_keywords {
            assert!(!result.missing_keywords.contains(kw), "{kw} in both sets");
        }
        let mut union: Vec<String> = result
            .matched_keywords
            .iter()
            .chain(result.missing_keywords.iter())
            .cloned()
            .collect();
        let mut expected = extracted;
        union.sort();
        expected.sort();
        assert_eq!(union, expected);
        assert!(result.matched_keywords.contains(&"docker".to_string()));
    }

    #[test]
    fn test_matched_keywords_keep_extraction_order() {
        let analyzer = Analyzer::default();
        let jd = "docker, kubernetes and git";
        let mut resume = complete_resume();
        resume.interests = vec!["git".to_string(), "docker".to_string()];

        let extracted = analyzer.extract_keywords(jd);
        let result = analyzer.analyze_resume(&resume, jd).unwrap();
        let in_order: Vec<&String> = extracted
            .iter()
            .filter(|k| result.matched_keywords.contains(k))
            .collect();
        assert_eq!(in_order, result.matched_keywords.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = Analyzer::default();
        let resume = complete_resume();
        let jd = "Product manager with roadmap, jira, stakeholder and kpi experience";

        let first = analyzer.analyze_resume(&resume, jd).unwrap();
        let second = analyzer.analyze_resume(&resume, jd).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_resume_is_rejected() {
        let mut resume = complete_resume();
        resume.skills.push(SkillEntry {
            name: "Rust".to_string(),
            category: "Languages".to_string(),
            level: 9,
            ..Default::default()
        });

        let err = Analyzer::default()
            .analyze_resume(&resume, "rust")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidResume(_)));
    }

    #[test]
    fn test_explain_total_equals_analysis_score() {
        let analyzer = web_analyzer();
        let resume = complete_resume();
        let jd = "javascript and react";

        let result = analyzer.analyze_resume(&resume, jd).unwrap();
        let breakdown = analyzer.explain_score(&resume, jd).unwrap();
        assert_eq!(breakdown.total, result.score);
    }

    #[tokio::test]
    async fn test_async_seam_matches_sync_path() {
        let analyzer = Analyzer::default();
        let resume = complete_resume();
        let jd = "SQL, Python, pandas and statistics";

        let shared: Arc<dyn ResumeAnalyzer> = Arc::new(analyzer.clone());
        let via_trait = shared.analyze(&resume, jd).await.unwrap();
        let direct = analyzer.analyze_resume(&resume, jd).unwrap();
        assert_eq!(via_trait, direct);
    }
}
