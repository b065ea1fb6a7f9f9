//! Axum route handlers for the ATS API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ats::scoring::ScoreBreakdown;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisResult, CachedAnalysis};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume: ResumeRecord,
    pub job_description: String,
    /// When set, the result is cached as this session's last analysis.
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub resume: ResumeRecord,
    pub job_description: String,
}

fn require_job_description(job_description: &str) -> Result<(), AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/keywords
///
/// Previews which catalog keywords a job description mentions.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    payload: Result<Json<KeywordsRequest>, JsonRejection>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let Json(request) = payload?;
    let keywords = state.analyzer.extract_keywords(&request.job_description);
    Ok(Json(KeywordsResponse { keywords }))
}

/// POST /api/v1/ats/analyze
///
/// Scores a résumé against a job description. With a `sessionId`, the result
/// replaces that session's cached analysis; a failed analysis leaves the
/// cache as it was.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload?;
    require_job_description(&request.job_description)?;

    let result = state
        .analyzer
        .analyze(&request.resume, &request.job_description)
        .await?;

    if let Some(session_id) = request.session_id {
        state
            .store
            .set(
                session_id,
                CachedAnalysis {
                    job_description: request.job_description,
                    result: result.clone(),
                    analyzed_at: Utc::now(),
                },
            )
            .await?;
        info!(%session_id, score = result.score, "Cached analysis for session");
    }

    Ok(Json(result))
}

/// POST /api/v1/ats/explain
///
/// Returns every additive term behind the score `analyze` would report.
pub async fn handle_explain(
    State(state): State<AppState>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let Json(request) = payload?;
    require_job_description(&request.job_description)?;

    let breakdown = state
        .analyzer
        .explain(&request.resume, &request.job_description)
        .await?;
    Ok(Json(breakdown))
}

/// GET /api/v1/ats/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CachedAnalysis>, AppError> {
    state
        .store
        .get(session_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No analysis cached for session {session_id}")))
}

/// DELETE /api/v1/ats/sessions/:id
pub async fn handle_clear_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.clear(session_id).await?;
    info!(%session_id, "Cleared cached analysis");
    Ok(StatusCode::NO_CONTENT)
}
