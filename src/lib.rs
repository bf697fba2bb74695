use pyo3::prelude::*;

pub mod clients;
pub mod errors;
pub mod labels;
pub mod models;
pub mod utils;
pub mod workflows;

pub use clients::{HttpScanBackend, ScanBackend};
pub use errors::ScanError;
pub use labels::{Labels, parse_label};
pub use models::{
    AssistantFormat, DeleteReport, DetectionEntry, HistoryBoard, HistoryFilter, ImageInput,
    LeafScanClient, PanelState, ServerConfig, Theme,
};
pub use utils::init_tracing;
pub use workflows::{CONFIDENCE_THRESHOLD, DeleteOutcome, ResultPresenter, delete_detection};

/// Rust client for the plant-disease-detection server.
///
/// Uploads leaf images or camera frames for prediction, asks the server's
/// assistant about confident matches, and deletes detection history.
///
/// Classes:
///     LeafScanClient: Main client running the prediction and delete workflows
///     ServerConfig: Base URL and endpoint paths
///     PanelState: Snapshot of the result panel
///     DetectionEntry: One history record
///
/// Example:
///     >>> from rusty_leaf_scan import LeafScanClient, ServerConfig
///     >>> client = LeafScanClient(ServerConfig("http://localhost:5000"), enable_logs=True)
///     >>> panel = client.predict_file("leaf.jpg")
///     >>> panel.to_dict()
#[pymodule]
fn rusty_leaf_scan(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<LeafScanClient>()?;
    m.add_class::<ServerConfig>()?;
    m.add_class::<PanelState>()?;
    m.add_class::<Theme>()?;
    m.add_class::<AssistantFormat>()?;
    m.add_class::<DetectionEntry>()?;
    m.add_class::<HistoryFilter>()?;
    m.add_class::<DeleteReport>()?;
    m.add("CONFIDENCE_THRESHOLD", CONFIDENCE_THRESHOLD)?;
    Ok(())
}
