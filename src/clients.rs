use std::future::Future;

use crate::errors::ScanError;
use crate::models::{ChatbotInfo, DeleteResponse, ImageInput, PredictionResult};

pub mod plant_server;

pub use plant_server::HttpScanBackend;

/// The server calls the workflows depend on.
///
/// `HttpScanBackend` talks to the real server; tests substitute an
/// in-memory fake.
pub trait ScanBackend: Send + Sync {
    /// `/predict` for file inputs, `/capture` for camera frames.
    fn predict(&self, input: &ImageInput) -> impl Future<Output = Result<PredictionResult, ScanError>> + Send;

    /// `/get_info`, keyed by the raw class label.
    fn fetch_info(&self, prediction: &str) -> impl Future<Output = Result<ChatbotInfo, ScanError>> + Send;

    /// `/delete/{id}`. The body is returned whatever the status code.
    fn delete_detection(&self, id: &str) -> impl Future<Output = Result<DeleteResponse, ScanError>> + Send;
}
