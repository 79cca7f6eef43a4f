use axum::{
    extract::Multipart,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::profile::checklist::{score_profile, ScoreResult};
use crate::profile::grammar::{check_grammar, GrammarReport};
use crate::profile::input::{decode_upload, UploadKind};
use crate::profile::keywords::{extract_keywords, summarize};

/// Request body shared by every feature that works on the pasted text.
#[derive(Debug, Deserialize)]
pub struct ProfileTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub character_count: usize,
    pub checklist: ScoreResult,
    pub summary: String,
    pub keywords: Vec<String>,
    pub grammar: GrammarReport,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_name: String,
    pub kind: UploadKind,
    pub text: String,
    pub analysis: AnalysisReport,
}

/// Runs every text heuristic on the same input. None depends on another's output.
pub fn analyze_profile(text: &str) -> AnalysisReport {
    AnalysisReport {
        character_count: text.chars().count(),
        checklist: score_profile(text),
        summary: summarize(text),
        keywords: extract_keywords(text),
        grammar: check_grammar(text),
    }
}

/// Empty or whitespace-only text is rejected before any feature runs.
pub fn require_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(())
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    Json(req): Json<ProfileTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    require_text(&req.text)?;

    let report = analyze_profile(&req.text);
    info!(
        score = report.checklist.score,
        keywords = report.keywords.len(),
        grammar_findings = report.grammar.findings.len(),
        "Profile analyzed"
    );
    Ok(Json(report))
}

/// POST /api/v1/upload
///
/// Accepts a multipart form with a single `file` field (.txt or .pdf).
pub async fn handle_upload(
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUpload(e.to_string()))?
    {
        if field.name() != Some("file") {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let file_name = field
            .file_name()
            .map(String::from)
            .ok_or_else(|| AppError::InvalidUpload("file field has no file name".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidUpload(e.to_string()))?;

        let (kind, text) = decode_upload(&file_name, data)
            .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
        require_text(&text)?;

        info!("Received {:?} upload '{}' ({} chars)", kind, file_name, text.chars().count());
        let analysis = analyze_profile(&text);

        return Ok(Json(UploadResponse {
            file_name,
            kind,
            text,
            analysis,
        }));
    }

    Err(AppError::InvalidUpload(
        "multipart body has no 'file' field".to_string(),
    ))
}
