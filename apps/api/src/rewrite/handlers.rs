//! Axum route handlers for the rewrite API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::profile::handlers::{require_text, ProfileTextRequest};
use crate::rewrite::paraphrase::rewrite_advanced;
use crate::rewrite::simple::rewrite_simple;
use crate::rewrite::tone::{change_tone, Tone};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ToneRequest {
    pub text: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub rewritten: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToneResponse {
    pub tone: Tone,
    pub rewritten: String,
}

/// POST /api/v1/rewrite/simple
pub async fn handle_rewrite_simple(
    Json(req): Json<ProfileTextRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    require_text(&req.text)?;
    let rewritten = rewrite_simple(&req.text)?;
    Ok(Json(RewriteResponse {
        rewritten,
        backend: None,
    }))
}

/// POST /api/v1/rewrite/advanced
///
/// Blocks on the external paraphrasing model. Load and inference failures come back as 502.
pub async fn handle_rewrite_advanced(
    State(state): State<AppState>,
    Json(req): Json<ProfileTextRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    require_text(&req.text)?;
    let rewritten = rewrite_advanced(&req.text, state.paraphraser.as_ref()).await?;
    info!("Advanced rewrite produced {} chars", rewritten.chars().count());
    Ok(Json(RewriteResponse {
        rewritten,
        backend: Some(state.paraphraser.backend().to_string()),
    }))
}

/// POST /api/v1/rewrite/tone
pub async fn handle_change_tone(
    Json(req): Json<ToneRequest>,
) -> Result<Json<ToneResponse>, AppError> {
    require_text(&req.text)?;
    let rewritten = change_tone(&req.text, req.tone)?;
    info!("Tone changed to {:?}", req.tone);
    Ok(Json(ToneResponse {
        tone: req.tone,
        rewritten,
    }))
}
