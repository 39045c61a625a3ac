//! File selection handlers.

use std::path::PathBuf;

use iced::Task;

use srg_core::media::AudioFile;

use crate::app::{App, Message};

impl App {
    /// Open the audio file picker.
    pub fn browse_audio_file(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Select Audio File")
                    .add_filter(
                        "Audio Files",
                        &["mp3", "wav", "m4a", "aac", "flac", "ogg", "opus", "wma", "aiff"],
                    )
                    .add_filter("All Files", &["*"])
                    .pick_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::FileSelected,
        )
    }

    /// Handle the dialog result. A cancelled dialog is a no-op.
    pub fn handle_file_selected(&mut self, path: Option<PathBuf>) {
        if let Some(path) = path {
            self.select_path(path);
        }
    }

    /// Handle a file dropped onto the window.
    pub fn handle_file_dropped(&mut self, path: PathBuf) {
        self.select_path(path);
    }

    fn select_path(&mut self, path: PathBuf) {
        if self.model.is_uploading {
            tracing::debug!("Ignoring file pick while an upload is in flight");
            return;
        }

        match AudioFile::from_path(&path) {
            Ok(file) => {
                tracing::info!(
                    "Selected {} ({}, {})",
                    file.file_name,
                    file.size_display(),
                    file.mime_type
                );
                self.model.select_file(file);
            }
            Err(e) => {
                tracing::warn!("Failed to inspect '{}': {}", path.display(), e);
                self.model.reject_selection();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use srg_core::client::PredictionClient;

    use crate::app::App;
    use crate::logic::INVALID_TYPE_MESSAGE;

    fn test_app() -> App {
        let (app, _task) = App::new(PredictionClient::new().unwrap());
        app
    }

    #[test]
    fn cancelled_dialog_is_a_no_op() {
        let mut app = test_app();

        app.handle_file_selected(None);

        assert_eq!(app.model.selected_file, None);
        assert_eq!(app.model.error_message, None);
    }

    #[test]
    fn dropping_an_audio_file_selects_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp3");
        fs::write(&path, b"ID3").unwrap();

        let mut app = test_app();
        app.handle_file_dropped(path);

        let file = app.model.selected_file.as_ref().unwrap();
        assert_eq!(file.file_name, "clip.mp3");
        assert_eq!(app.model.error_message, None);
    }

    #[test]
    fn dropping_a_non_audio_file_reports_the_invalid_type_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"hello").unwrap();

        let mut app = test_app();
        app.handle_file_dropped(path);

        assert_eq!(app.model.selected_file, None);
        assert_eq!(
            app.model.error_message.as_deref(),
            Some(INVALID_TYPE_MESSAGE)
        );
    }

    #[test]
    fn dropping_an_uninspectable_path_is_a_rejection() {
        let mut app = test_app();

        app.handle_file_dropped("/nonexistent/clip.wav".into());

        assert_eq!(app.model.selected_file, None);
        assert_eq!(
            app.model.error_message.as_deref(),
            Some(INVALID_TYPE_MESSAGE)
        );
    }

    #[test]
    fn picks_are_ignored_while_an_upload_is_in_flight() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        fs::write(&path, b"RIFF").unwrap();

        let mut app = test_app();
        app.handle_file_dropped(path);
        let _ = app.start_prediction();

        let other = dir.path().join("other.flac");
        fs::write(&other, b"fLaC").unwrap();
        app.handle_file_dropped(other);

        let file = app.model.selected_file.as_ref().unwrap();
        assert_eq!(file.file_name, "clip.wav");
    }
}
