use tracing::{info, warn};

use crate::clients::ScanBackend;
use crate::models::HistoryBoard;

pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this detection history? This action cannot be undone.";
pub const DELETE_FAILED: &str = "An error occurred while trying to delete the detection.";
pub const DELETE_REJECTED_FALLBACK: &str = "Detection could not be deleted.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    Removed,
    /// The server answered `success: false`.
    Rejected { message: String },
    /// No usable answer from the server.
    Failed { message: String },
}

impl DeleteOutcome {
    /// Text for the blocking alert, if the user must be told anything.
    pub fn alert(&self) -> Option<String> {
        match self {
            DeleteOutcome::Cancelled | DeleteOutcome::Removed => None,
            DeleteOutcome::Rejected { message } => Some(format!("Error: {}", message)),
            DeleteOutcome::Failed { message } => Some(message.clone()),
        }
    }
}

/// Ask `confirm`, then delete detection `id` on the server and drop it from
/// `board` once the server reports success.
pub async fn delete_detection<B, F>(backend: &B, board: &HistoryBoard, id: &str, confirm: F) -> DeleteOutcome
where
    B: ScanBackend,
    F: FnOnce(&str) -> bool,
{
    if !confirm(DELETE_PROMPT) {
        return DeleteOutcome::Cancelled;
    }

    match backend.delete_detection(id).await {
        Ok(response) if response.success => {
            let was_shown = board.remove(id);
            info!(detection_id = id, was_shown = was_shown, "Detection deleted");
            DeleteOutcome::Removed
        }
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| DELETE_REJECTED_FALLBACK.to_string());
            warn!(detection_id = id, message = message.as_str(), "Server refused deletion");
            DeleteOutcome::Rejected { message }
        }
        Err(err) => {
            warn!(detection_id = id, error = %err, transport = err.is_transport(), "Failed to delete detection");
            DeleteOutcome::Failed {
                message: DELETE_FAILED.to_string(),
            }
        }
    }
}
