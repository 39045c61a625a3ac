//! Selected audio file model.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mime::guess_mime_type;

/// Errors when inspecting a file picked for upload.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Failed to read metadata for '{path}': {source}")]
    Metadata {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Not a regular file: '{0}'")]
    NotAFile(String),
}

/// A file picked for upload: name, size, and extension-derived MIME type.
///
/// This is a plain value; the bytes are read only when the upload runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFile {
    /// Full path on disk.
    pub path: PathBuf,
    /// File name as shown to the user and sent with the upload.
    pub file_name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type derived from the extension.
    pub mime_type: String,
}

impl AudioFile {
    /// Inspect a path picked in the file dialog or dropped on the window.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, MediaError> {
        let path = path.into();
        let metadata = fs::metadata(&path).map_err(|source| MediaError::Metadata {
            path: path.display().to_string(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(MediaError::NotAFile(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = guess_mime_type(&path);

        Ok(Self {
            path,
            file_name,
            size_bytes: metadata.len(),
            mime_type,
        })
    }

    /// Whether the MIME type identifies an audio file.
    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }

    /// Size formatted as megabytes with two decimals, e.g. "1.00 MB".
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}
