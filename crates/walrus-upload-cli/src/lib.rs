//! Helpers for the walrus-upload binary: tracing setup and file loading.

use std::path::Path;

use anyhow::{Context, Result};
use walrus_upload_client::SelectedFile;

/// Initialize tracing for the CLI binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Best-effort media type from the file extension. A browser form would
/// report the picked file's type; unknown extensions map to
/// application/octet-stream.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        Some("mp4") => "video/mp4",
        Some("mp3") => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

/// Load a file from disk into the form's selected-file shape.
pub fn read_selected_file(path: &Path) -> Result<SelectedFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("blob")
        .to_string();

    Ok(SelectedFile {
        name,
        media_type: media_type_for_path(path).to_string(),
        bytes,
    })
}
