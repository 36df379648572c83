//! The user's file selection.

use std::path::{Path, PathBuf};

/// A file picked for upload: path plus the metadata that travels with the
/// multipart part (file name and MIME type).
///
/// Construction performs no I/O and no validation; the bytes are read only
/// when the selection is submitted, so a file that vanishes in between
/// surfaces as an upload error at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
    mime: &'static str,
}

impl SelectedFile {
    /// Record a selection, deriving the file name and MIME type from the path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let mime = mime_for_path(&path);
        Self { path, name, mime }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime
    }

    /// Whether the guessed MIME type is an image type.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Guess a MIME type from the file extension.
///
/// Covers the image types a picker filtered to `image/*` would yield;
/// everything else is labelled `application/octet-stream` and sent as-is
/// (selection is never rejected client-side).
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
