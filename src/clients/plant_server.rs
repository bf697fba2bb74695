use reqwest::{
    Client, Response, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
    multipart::{Form, Part},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::clients::ScanBackend;
use crate::errors::ScanError;
use crate::models::{
    ChatbotInfo, DeleteResponse, ImageInput, PredictionResult, ServerConfig, ServerErrorBody,
    chatbot_info::InfoRequest,
};

const INFO_FAILED: &str = "Failed to get chatbot info.";

#[derive(Serialize)]
struct CaptureRequest<'a> {
    image: &'a str,
}

/// `ScanBackend` over HTTP, one shared connection pool.
#[derive(Clone, Debug)]
pub struct HttpScanBackend {
    client: Client,
    config: ServerConfig,
}

impl HttpScanBackend {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl ScanBackend for HttpScanBackend {
    async fn predict(&self, input: &ImageInput) -> Result<PredictionResult, ScanError> {
        let response = match input {
            ImageInput::Capture { data_url } => {
                let endpoint = self.config.capture_url();
                info!(endpoint = endpoint.as_str(), "Submitting camera capture");
                self.client
                    .post(&endpoint)
                    .json(&CaptureRequest { image: data_url })
                    .send()
                    .await?
            }
            ImageInput::File { .. } | ImageInput::Upload { .. } => {
                let upload = input.read_upload().await?;
                let endpoint = self.config.predict_url();
                info!(
                    endpoint = endpoint.as_str(),
                    file_name = upload.file_name.as_str(),
                    bytes = upload.bytes.len(),
                    "Submitting image for prediction"
                );
                let part = Part::bytes(upload.bytes)
                    .file_name(upload.file_name)
                    .mime_str(upload.content_type)?;
                self.client
                    .post(&endpoint)
                    .multipart(Form::new().part("file", part))
                    .send()
                    .await?
            }
        };

        read_json(response, |status| format!("Server error: {}", status.as_u16())).await
    }

    async fn fetch_info(&self, prediction: &str) -> Result<ChatbotInfo, ScanError> {
        let endpoint = self.config.info_url();
        info!(endpoint = endpoint.as_str(), prediction = prediction, "Requesting supplementary info");
        let response = self
            .client
            .post(&endpoint)
            .json(&InfoRequest { prediction })
            .send()
            .await?;

        read_json(response, |_| INFO_FAILED.to_string()).await
    }

    async fn delete_detection(&self, id: &str) -> Result<DeleteResponse, ScanError> {
        let endpoint = self.config.delete_url(id);
        let response = self
            .client
            .post(&endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;
        let status = response.status();
        info!(
            detection_id = id,
            status_code = status.as_u16(),
            "Delete request answered"
        );

        // 404 and 500 still carry a {success, message} body
        let body = response.bytes().await?;
        Ok(serde_json::from_slice::<DeleteResponse>(&body)?)
    }
}

async fn read_json<T, F>(response: Response, fallback: F) -> Result<T, ScanError>
where
    T: DeserializeOwned,
    F: FnOnce(StatusCode) -> String,
{
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        let message = serde_json::from_slice::<ServerErrorBody>(&body)
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| fallback(status));
        warn!(status_code = status.as_u16(), message = message.as_str(), "Server reported failure");
        return Err(ScanError::Server { status, message });
    }
    Ok(serde_json::from_slice(&body)?)
}
