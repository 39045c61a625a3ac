//! Prediction endpoint client.
//!
//! Uploads one audio file as multipart form data and reads back the
//! predicted recording device. The classifier itself runs behind the
//! endpoint; this client only moves bytes and decodes the answer.

use reqwest::header::ACCEPT;
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::AudioFile;

/// Fixed local endpoint of the classification service.
pub const PREDICT_ENDPOINT: &str = "http://127.0.0.1:8000/predict/";

const USER_AGENT: &str = concat!("SourceRecognitionGUI/", env!("CARGO_PKG_VERSION"));

/// Prediction client errors.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Failed to read audio file: {0}")]
    FileRead(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Prediction endpoint returned status {0}")]
    ApiError(u16),

    #[error("Failed to parse prediction response: {0}")]
    ParseError(String),
}

/// Response from the prediction endpoint.
///
/// `predicted_device` is the only field consumed; anything else the
/// service sends alongside is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictResponse {
    pub predicted_device: String,
}

/// Client for the prediction endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    /// Create a client against the fixed local endpoint.
    ///
    /// No request timeout is set: a submission stays in flight until the
    /// endpoint answers or the connection drops.
    pub fn new() -> Result<Self, PredictError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PredictError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: PREDICT_ENDPOINT.to_string(),
        })
    }

    /// Create a client against a different endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, PredictError> {
        let mut client = Self::new()?;
        client.endpoint = endpoint.into();
        Ok(client)
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload an audio file and return the predicted device.
    ///
    /// The file goes out as one multipart part under field name "file",
    /// carrying the original filename and its MIME type. Any non-success
    /// status or undecodable body is an error.
    pub async fn predict_device(&self, file: &AudioFile) -> Result<PredictResponse, PredictError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| PredictError::FileRead(e.to_string()))?;

        tracing::debug!(
            "POST {} ({}, {} bytes, {})",
            self.endpoint,
            file.file_name,
            bytes.len(),
            file.mime_type
        );

        let part = multipart::Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| PredictError::InvalidRequest(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::ApiError(status.as_u16()));
        }

        response
            .json::<PredictResponse>()
            .await
            .map_err(|e| PredictError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_client_creation() {
        let client = PredictionClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().endpoint(), PREDICT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_override() {
        let client = PredictionClient::with_endpoint("http://127.0.0.1:9999/predict/").unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9999/predict/");
    }

    #[test]
    fn response_parses_predicted_device() {
        let resp: PredictResponse =
            serde_json::from_str(r#"{"predicted_device":"iPhone 12"}"#).unwrap();
        assert_eq!(resp.predicted_device, "iPhone 12");
    }

    #[test]
    fn response_ignores_extra_fields() {
        let resp: PredictResponse = serde_json::from_str(
            r#"{"predicted_device":"Samsung Galaxy S21","confidence":0.93,"model_version":"v2"}"#,
        )
        .unwrap();
        assert_eq!(resp.predicted_device, "Samsung Galaxy S21");
    }

    #[test]
    fn response_without_device_field_is_an_error() {
        let resp = serde_json::from_str::<PredictResponse>(r#"{"label":"iPhone 12"}"#);
        assert!(resp.is_err());
    }

    #[test]
    fn error_display_carries_context() {
        assert_eq!(
            PredictError::ApiError(500).to_string(),
            "Prediction endpoint returned status 500"
        );
        assert!(PredictError::ParseError("unexpected EOF".into())
            .to_string()
            .contains("unexpected EOF"));
    }

    #[tokio::test]
    async fn upload_of_missing_file_fails_before_any_network_call() {
        let client = PredictionClient::with_endpoint("http://127.0.0.1:9999/predict/").unwrap();
        let file = AudioFile {
            path: PathBuf::from("/nonexistent/clip.wav"),
            file_name: "clip.wav".to_string(),
            size_bytes: 0,
            mime_type: "audio/wav".to_string(),
        };

        let err = client.predict_device(&file).await.unwrap_err();
        assert!(matches!(err, PredictError::FileRead(_)));
    }
}
