//! HTTP client for the prediction endpoint.

mod prediction;

pub use prediction::{PredictError, PredictResponse, PredictionClient, PREDICT_ENDPOINT};
