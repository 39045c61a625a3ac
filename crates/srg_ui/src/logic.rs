//! State transitions for the upload form.
//!
//! All mutation of `AppModel` goes through these methods; the view is a
//! pure projection and the handlers only decide which transition to run.

use srg_core::media::AudioFile;

use crate::model::AppModel;

/// Shown when the picked file is not an audio file.
pub const INVALID_TYPE_MESSAGE: &str = "Please upload an audio file";

/// Shown when a submission fails for any reason.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to process audio file. Please try again.";

impl AppModel {
    /// Whether a submission can start (file selected, none in flight).
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.is_uploading
    }

    /// Apply a file pick. A valid audio file replaces the selection and
    /// clears any prior error; anything else rejects the pick.
    pub fn select_file(&mut self, file: AudioFile) {
        if file.is_audio() {
            self.selected_file = Some(file);
            self.error_message = None;
        } else {
            self.reject_selection();
        }
    }

    /// Reject a pick: clear the selection and report the fixed
    /// invalid-type message. Also used when a pick cannot be inspected
    /// at all (vanished file, directory drop).
    pub fn reject_selection(&mut self) {
        self.selected_file = None;
        self.error_message = Some(INVALID_TYPE_MESSAGE.to_string());
    }

    /// Mark a submission as started: busy, prior outcome cleared.
    pub fn begin_submission(&mut self) {
        self.is_uploading = true;
        self.predicted_device = None;
        self.error_message = None;
    }

    /// Settle a submission with the returned device label.
    pub fn finish_success(&mut self, device: String) {
        self.predicted_device = Some(device);
        self.is_uploading = false;
    }

    /// Settle a submission with the fixed failure message.
    pub fn finish_failure(&mut self) {
        self.error_message = Some(UPLOAD_FAILED_MESSAGE.to_string());
        self.is_uploading = false;
    }
}
