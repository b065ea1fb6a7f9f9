//! ATS score: a transparent additive model.
//!
//! score = clamp(70 + keyword bonus − 3 × formatting issues + completeness, 0, 100)
//!
//! Every term is reported in `ScoreBreakdown` so each point can be explained.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

pub const BASE_SCORE: i64 = 70;
pub const KEYWORD_BONUS_MAX: f64 = 20.0;
pub const PENALTY_PER_ISSUE: i64 = 3;
pub const MAX_SCORE: i64 = 100;

pub const SUMMARY_BONUS_MIN_CHARS: usize = 100;
pub const EXPERIENCE_BONUS_MIN_ENTRIES: usize = 2;
pub const SKILLS_BONUS_MIN: usize = 8;

/// Points awarded for a filled-out résumé, independent of keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessBonus {
    pub personal_info: i64, // 0 or 2
    pub summary: i64,       // 0 or 2
    pub experience: i64,    // 0 or 3
    pub education: i64,     // 0 or 1
    pub skills: i64,        // 0 or 2
}

impl CompletenessBonus {
    pub fn total(&self) -> i64 {
        self.personal_info + self.summary + self.experience + self.education + self.skills
    }
}

/// Each additive term of the score, plus the clamped total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: i64,
    pub keyword_bonus: i64,
    /// Zero or negative.
    pub formatting_penalty: i64,
    pub completeness: CompletenessBonus,
    pub total: u32,
}

/// Final 0–100 score. Always equals `score_breakdown(..).total`.
pub fn calculate_ats_score(
    resume: &ResumeRecord,
    job_keywords: &[String],
    missing_keywords: &[String],
    formatting_issues: &[String],
) -> u32 {
    score_breakdown(resume, job_keywords, missing_keywords, formatting_issues).total
}

pub fn score_breakdown(
    resume: &ResumeRecord,
    job_keywords: &[String],
    missing_keywords: &[String],
    formatting_issues: &[String],
) -> ScoreBreakdown {
    let keyword_bonus = keyword_bonus(job_keywords.len(), missing_keywords.len());
    let formatting_penalty = -PENALTY_PER_ISSUE.saturating_mul(formatting_issues.len() as i64);
    let completeness = completeness_bonus(resume);

    let sum = BASE_SCORE
        .saturating_add(keyword_bonus)
        .saturating_add(formatting_penalty)
        .saturating_add(completeness.total());

    ScoreBreakdown {
        base: BASE_SCORE,
        keyword_bonus,
        formatting_penalty,
        completeness,
        total: sum.clamp(0, MAX_SCORE) as u32,
    }
}

/// `round(matched / total × 20)`, or 0 when the job named no keywords.
fn keyword_bonus(total: usize, missing: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    let matched = total.saturating_sub(missing);
    ((matched as f64 / total as f64) * KEYWORD_BONUS_MAX).round() as i64
}

fn completeness_bonus(resume: &ResumeRecord) -> CompletenessBonus {
    let mut bonus = CompletenessBonus::default();

    if resume.has_complete_personal_info() {
        bonus.personal_info = 2;
    }

    if resume.summary.chars().count() >= SUMMARY_BONUS_MIN_CHARS {
        bonus.summary = 2;
    }

    if resume.experience.len() >= EXPERIENCE_BONUS_MIN_ENTRIES
        && resume.experience.iter().all(|e| e.is_complete())
    {
        bonus.experience = 3;
    }

    // Vacuously complete with no education entries.
    if resume.education.iter().all(|e| e.is_complete()) {
        bonus.education = 1;
    }

    if resume.skills.len() >= SKILLS_BONUS_MIN {
        bonus.skills = 2;
    }

    bonus
}
