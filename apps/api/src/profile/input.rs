//! Input acquisition: turns an uploaded file into profile text.

use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported file type '{0}': upload a .txt or .pdf file")]
    UnsupportedType(String),

    #[error("File is not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Could not extract text from PDF: {0}")]
    Pdf(String),

    #[error("Uploaded file is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    PlainText,
    Pdf,
}

impl UploadKind {
    pub fn from_file_name(file_name: &str) -> Result<Self, UploadError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(UploadKind::PlainText),
            "pdf" => Ok(UploadKind::Pdf),
            _ => Err(UploadError::UnsupportedType(file_name.to_string())),
        }
    }
}

/// Decodes an uploaded file into text according to its extension.
///
/// Plain-text files must be valid UTF-8. PDFs go through `pdf-extract`.
pub fn decode_upload(file_name: &str, data: Bytes) -> Result<(UploadKind, String), UploadError> {
    let kind = UploadKind::from_file_name(file_name)?;
    if data.is_empty() {
        return Err(UploadError::Empty);
    }

    let text = match kind {
        UploadKind::PlainText => String::from_utf8(data.to_vec())?,
        UploadKind::Pdf => pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| UploadError::Pdf(e.to_string()))?,
    };

    Ok((kind, text))
}
