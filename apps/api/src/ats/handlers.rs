//! Axum route handlers for the ATS scan API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::ats::profile::AtsProfile;
use crate::ats::scorer::ScoreResult;
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload
///
/// Multipart upload (field `resume`, text-based PDF). Extracts the text, scores
/// it and attaches AI suggestions.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let request_id = Uuid::new_v4();
    async move {
        let document = read_resume_field(multipart).await?;
        info!(bytes = document.len(), "Résumé received");

        let resume_text = state.extractor.extract(document).await?;
        let result = state.scorer.score(&resume_text);
        info!(
            score = result.score.value(),
            matched = result.matched_keywords.len(),
            "Résumé scored"
        );

        let suggestions = state.suggester.suggest(&result, &resume_text).await;

        Ok::<_, AppError>(Json(UploadResponse {
            result,
            suggestions,
        }))
    }
    .instrument(info_span!("upload", %request_id))
    .await
}

/// POST /api/v1/score
///
/// Scores plain text directly. No extraction, no AI call.
pub async fn handle_score_text(
    State(state): State<AppState>,
    Json(request): Json<ScoreTextRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(Json(state.scorer.score(&request.text)))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<AtsProfile> {
    Json(state.scorer.profile().clone())
}

async fn read_resume_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok(data);
    }
    Err(AppError::Validation("No file uploaded".to_string()))
}
