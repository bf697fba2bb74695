use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::impl_to_dict;
use crate::workflows::DeleteOutcome;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Python view of a [`DeleteOutcome`].
///
/// `status` is one of `cancelled`, `removed`, `rejected`, `failed`;
/// `alert` is the text to show the user, if any.
#[pyclass]
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DeleteReport {
    #[pyo3(get)]
    pub detection_id: String,
    #[pyo3(get)]
    pub status: String,
    #[pyo3(get)]
    pub removed: bool,
    #[pyo3(get)]
    pub message: Option<String>,
    #[pyo3(get)]
    pub alert: Option<String>,
}
impl_to_dict!(DeleteReport);

impl DeleteReport {
    pub fn from_outcome(detection_id: &str, outcome: &DeleteOutcome) -> Self {
        let (status, message) = match outcome {
            DeleteOutcome::Cancelled => ("cancelled", None),
            DeleteOutcome::Removed => ("removed", None),
            DeleteOutcome::Rejected { message } => ("rejected", Some(message.clone())),
            DeleteOutcome::Failed { message } => ("failed", Some(message.clone())),
        };
        Self {
            detection_id: detection_id.to_string(),
            status: status.to_string(),
            removed: *outcome == DeleteOutcome::Removed,
            message,
            alert: outcome.alert(),
        }
    }
}
