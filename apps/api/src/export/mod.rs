// PDF export: page layout, word wrap, font metrics, and the lopdf writer.
// Layout and file I/O are blocking and run inside tokio::task::spawn_blocking.

pub mod document;
pub mod font_metrics;
pub mod handlers;
pub mod pdf;
pub mod wrap;

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::export::document::{layout_document, PageConfig};
use crate::export::pdf::render_pdf;

/// Fixed output name. Every export overwrites the previous file.
pub const EXPORT_FILE_NAME: &str = "Generated_Resume.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub file_name: String,
    pub path: PathBuf,
    pub pages: usize,
    pub bytes_written: usize,
}

/// Renders `text` and writes it to `EXPORT_FILE_NAME` inside `dir`, replacing any existing file.
pub fn export_profile(text: &str, dir: &Path, config: &PageConfig) -> Result<ExportReport, ExportError> {
    let pages = layout_document(text, config);
    let bytes = render_pdf(&pages, config)?;

    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, &bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!("Exported {} page(s), {} bytes to {}", pages.len(), bytes.len(), path.display());
    Ok(ExportReport {
        file_name: EXPORT_FILE_NAME.to_string(),
        path,
        pages: pages.len(),
        bytes_written: bytes.len(),
    })
}
