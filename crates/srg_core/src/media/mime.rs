//! Extension-based MIME type lookup.
//!
//! Files on disk carry no content type, so the type is derived from the
//! extension. Unknown extensions resolve to `application/octet-stream`,
//! which the selection logic rejects as non-audio.

use std::path::Path;

/// Fallback type for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Look up the MIME type for a file extension (without the dot).
///
/// Covers the audio formats the file dialog offers plus a few common
/// non-audio types so misdirected picks resolve to a real type.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "wma" => "audio/x-ms-wma",
        "aiff" | "aif" => "audio/aiff",
        "mka" => "audio/x-matroska",
        "mp4" | "m4v" => "video/mp4",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return None,
    };
    Some(mime)
}

/// Derive the MIME type for a path from its extension.
pub fn guess_mime_type(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .unwrap_or(OCTET_STREAM)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn audio_extensions_map_to_audio_types() {
        for ext in ["mp3", "wav", "m4a", "aac", "flac", "ogg", "opus", "aiff"] {
            let mime = mime_for_extension(ext).unwrap();
            assert!(mime.starts_with("audio/"), "{ext} mapped to {mime}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(mime_for_extension("MP3"), Some("audio/mpeg"));
        assert_eq!(mime_for_extension("Wav"), Some("audio/wav"));
    }

    #[test]
    fn non_audio_extensions_do_not_map_to_audio() {
        for ext in ["mkv", "txt", "pdf", "png"] {
            let mime = mime_for_extension(ext).unwrap();
            assert!(!mime.starts_with("audio/"), "{ext} mapped to {mime}");
        }
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(mime_for_extension("xyz"), None);
        assert_eq!(guess_mime_type(&PathBuf::from("sample.xyz")), OCTET_STREAM);
        assert_eq!(guess_mime_type(&PathBuf::from("no_extension")), OCTET_STREAM);
    }

    #[test]
    fn guess_uses_the_extension() {
        assert_eq!(guess_mime_type(&PathBuf::from("/tmp/clip.flac")), "audio/flac");
        assert_eq!(guess_mime_type(&PathBuf::from("notes.TXT")), "text/plain");
    }
}
