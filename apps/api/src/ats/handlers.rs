//! Axum route handlers for the ATS check API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::ats::grade::Grade;
use crate::ats::keywords::{keyword_universe, RoleCategory};
use crate::ats::progress::completion_progress;
use crate::ats::scoring::{CategoryScore, ScoreResult};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

const MAX_ROLE_QUERY_CHARS: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreResponse {
    pub score: u32,
    pub grade: Grade,
    pub feedback: String,
    pub breakdown: Vec<CategoryScore>,
    pub scorer_backend: &'static str,
    pub details: ScoreResult,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: u8,
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsResponse {
    pub role_category: Option<RoleCategory>,
    pub keywords: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/ats-score
///
/// Scores the submitted résumé. Any well-formed document scores; an empty
/// one simply lands in the F band with every "add X" suggestion.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    payload: Result<Json<ResumeDocument>, JsonRejection>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let Json(document) = payload.map_err(invalid_body)?;

    let details = state.scorer.score(&document);
    tracing::info!(
        score = details.overall_score,
        grade = %details.grade,
        "ATS check completed"
    );

    Ok(Json(AtsScoreResponse {
        score: details.overall_score,
        grade: details.grade,
        feedback: details.feedback.clone(),
        breakdown: details.category_scores.breakdown(),
        scorer_backend: state.scorer.backend(),
        details,
    }))
}

/// POST /api/v1/resumes/progress
pub async fn handle_progress(
    payload: Result<Json<ResumeDocument>, JsonRejection>,
) -> Result<Json<ProgressResponse>, AppError> {
    let Json(document) = payload.map_err(invalid_body)?;
    Ok(Json(ProgressResponse {
        progress: completion_progress(&document),
    }))
}

/// GET /api/v1/ats/keywords?role=...
///
/// The keyword universe the scorer would check a résumé with this role against.
pub async fn handle_keywords(
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let Query(params) =
        query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let role = params.role.unwrap_or_default();
    if role.chars().count() > MAX_ROLE_QUERY_CHARS {
        return Err(AppError::Validation(format!(
            "role cannot exceed {MAX_ROLE_QUERY_CHARS} characters"
        )));
    }

    Ok(Json(KeywordsResponse {
        role_category: RoleCategory::detect(&role),
        keywords: keyword_universe(&role),
    }))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(rejection.body_text());
    }
    AppError::Validation(format!("invalid resume document: {}", rejection.body_text()))
}
