//! File acquisition from the local filesystem
//!
//! The browser form got a `File` object with a declared MIME type for free;
//! a headless front only has a path, so the type is detected from magic
//! bytes, falling back to the extension for the formats the form accepts.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use crate::models::SelectedFile;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load a candidate file from disk.
///
/// Reads the full content (uploads are capped at 10 MB anyway) and detects
/// the MIME type by magic bytes.
pub async fn from_path(path: &Path) -> Result<SelectedFile, AcquireError> {
    let bytes = fs::read(path).await.map_err(|source| AcquireError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mime_type = infer::get(&bytes)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| mime_from_extension(path).to_string());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::debug!(file = %name, mime = %mime_type, size = bytes.len(), "acquired file");

    Ok(SelectedFile::new(name, mime_type, bytes))
}

/// Extension fallback for content `infer` does not recognize.
///
/// Covers the formats the upload form advertises: JPG, PNG, WebP, HEIC.
fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}
