//! Upload handlers.

use iced::Task;

use srg_core::client::PredictResponse;

use crate::app::{App, Message};

impl App {
    /// Start uploading the selected file.
    ///
    /// No-op without a selection or while an upload is in flight (the
    /// submit button is disabled in both cases; this re-checks anyway).
    pub fn start_prediction(&mut self) -> Task<Message> {
        if !self.model.can_submit() {
            return Task::none();
        }
        let Some(file) = self.model.selected_file.clone() else {
            return Task::none();
        };

        self.model.begin_submission();
        tracing::info!("Uploading {} ({})", file.file_name, file.size_display());

        let client = self.client.clone();
        Task::perform(
            async move { client.predict_device(&file).await },
            |result| match result {
                Ok(response) => Message::PredictionComplete(response),
                Err(e) => Message::PredictionFailed(e.to_string()),
            },
        )
    }

    /// Handle a successful prediction.
    pub fn handle_prediction_complete(&mut self, response: PredictResponse) {
        tracing::info!("Predicted device: {}", response.predicted_device);
        self.model.finish_success(response.predicted_device);
    }

    /// Handle a failed prediction. The cause goes to the log only; the
    /// user sees the fixed message.
    pub fn handle_prediction_failed(&mut self, error: &str) {
        tracing::error!("Prediction failed: {}", error);
        self.model.finish_failure();
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use srg_core::client::{PredictResponse, PredictionClient};
    use srg_core::media::AudioFile;

    use crate::app::App;
    use crate::logic::UPLOAD_FAILED_MESSAGE;

    fn test_app() -> App {
        let (app, _task) = App::new(PredictionClient::new().unwrap());
        app
    }

    fn audio_file() -> AudioFile {
        AudioFile {
            path: PathBuf::from("/tmp/recording.wav"),
            file_name: "recording.wav".to_string(),
            size_bytes: 1_048_576,
            mime_type: "audio/wav".to_string(),
        }
    }

    #[test]
    fn submit_without_a_file_changes_nothing() {
        let mut app = test_app();

        let _ = app.start_prediction();

        assert!(!app.model.is_uploading);
        assert_eq!(app.model.predicted_device, None);
        assert_eq!(app.model.error_message, None);
    }

    #[test]
    fn submit_enters_the_busy_state_with_outcome_cleared() {
        let mut app = test_app();
        app.model.select_file(audio_file());
        app.model.predicted_device = Some("stale".to_string());

        let _ = app.start_prediction();

        assert!(app.model.is_uploading);
        assert_eq!(app.model.predicted_device, None);
        assert_eq!(app.model.error_message, None);
    }

    #[test]
    fn submit_while_uploading_is_a_no_op() {
        let mut app = test_app();
        app.model.select_file(audio_file());
        let _ = app.start_prediction();

        let _ = app.start_prediction();

        assert!(app.model.is_uploading);
    }

    #[test]
    fn completion_settles_to_the_predicted_device() {
        let mut app = test_app();
        app.model.select_file(audio_file());
        let _ = app.start_prediction();

        app.handle_prediction_complete(PredictResponse {
            predicted_device: "iPhone 12".to_string(),
        });

        assert!(!app.model.is_uploading);
        assert_eq!(app.model.predicted_device.as_deref(), Some("iPhone 12"));
        assert_eq!(app.model.error_message, None);
    }

    #[test]
    fn failure_settles_to_the_fixed_message() {
        let mut app = test_app();
        app.model.select_file(audio_file());
        let _ = app.start_prediction();

        app.handle_prediction_failed("connection refused");

        assert!(!app.model.is_uploading);
        assert_eq!(app.model.predicted_device, None);
        assert_eq!(
            app.model.error_message.as_deref(),
            Some(UPLOAD_FAILED_MESSAGE)
        );
    }
}
