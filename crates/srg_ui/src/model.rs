//! Upload form state model.

use srg_core::media::AudioFile;

/// Upload form state.
///
/// Exactly one of `predicted_device` / `error_message` is set once a
/// submission settles; both are cleared when the next one starts.
#[derive(Debug, Default)]
pub struct AppModel {
    /// The selected audio file, if the most recent pick was valid.
    pub selected_file: Option<AudioFile>,
    /// True while an upload is in flight.
    pub is_uploading: bool,
    /// Device label from the last successful submission.
    pub predicted_device: Option<String>,
    /// User-visible error from an invalid pick or a failed submission.
    pub error_message: Option<String>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }
}
