//! Axum route handlers for the export API.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::export::document::default_page_config;
use crate::export::{export_profile, ExportReport, EXPORT_FILE_NAME};
use crate::profile::handlers::{require_text, ProfileTextRequest};
use crate::state::AppState;

/// POST /api/v1/export
///
/// Writes the PDF to the configured export directory. Rendering and the file write
/// run on the blocking pool.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(req): Json<ProfileTextRequest>,
) -> Result<Json<ExportReport>, AppError> {
    require_text(&req.text)?;

    let dir = state.config.export_dir.clone();
    let report = tokio::task::spawn_blocking(move || {
        export_profile(&req.text, &dir, &default_page_config())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}")))?
    .map_err(|e| AppError::Export(e.to_string()))?;

    Ok(Json(report))
}

/// GET /api/v1/export/download
///
/// Streams back the most recently exported PDF.
pub async fn handle_download(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let path = state.config.export_dir.join(EXPORT_FILE_NAME);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(
                "No resume has been exported yet".to_string(),
            ))
        }
        Err(e) => return Err(AppError::Export(format!("could not read {}: {e}", path.display()))),
    };

    info!("Serving {} ({} bytes)", path.display(), bytes.len());
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        bytes,
    ))
}
