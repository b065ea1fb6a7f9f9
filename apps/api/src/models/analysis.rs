use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one résumé-vs-job-description analysis.
///
/// `matched_keywords` and `missing_keywords` partition the keywords extracted
/// from the job description and both keep catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    pub formatting_issues: Vec<String>,
}

/// The last analysis of a session, as kept by an `AnalysisStore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedAnalysis {
    pub job_description: String,
    pub result: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}
