use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// Server unreachable or the connection broke mid-request.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx status; `message` is what the server said, or a generic line.
    #[error("{message}")]
    Server { status: StatusCode, message: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("{0:#}")]
    Input(#[from] anyhow::Error),
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Malformed(err.to_string())
    }
}

impl ScanError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ScanError::Transport(_) | ScanError::Malformed(_))
    }
}
