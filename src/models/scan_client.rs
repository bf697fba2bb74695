use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use tokio::runtime::Runtime;

use crate::clients::HttpScanBackend;
use crate::init_tracing;
use crate::models::{DeleteReport, DetectionEntry, HistoryBoard, HistoryFilter, ImageInput, PanelState, ServerConfig};
use crate::workflows::{ResultPresenter, delete_detection, history::DELETE_PROMPT};

/// A client for the plant-disease-detection server.
///
/// Submits leaf images for prediction, fetches the assistant's description
/// for confident matches, and manages the detection history. Results come
/// back as `PanelState` snapshots ready to be drawn.
///
/// Args:
///     config (ServerConfig): Where the server lives
///     enable_logs (bool): Install a stderr tracing subscriber (honors RUST_LOG)
///
/// Example:
///     >>> from rusty_leaf_scan import LeafScanClient, ServerConfig
///     >>> client = LeafScanClient(ServerConfig("http://localhost:5000"))
///     >>> panel = client.predict_file("/leaves/tomato.jpg")
///     >>> print(panel.crop, panel.disease, panel.confidence_text)
#[pyclass]
pub struct LeafScanClient {
    runtime: Runtime,
    presenter: ResultPresenter<HttpScanBackend>,
    history: HistoryBoard,
}

impl LeafScanClient {
    fn submit(&self, py: Python, input: ImageInput) -> PanelState {
        py.detach(move || {
            self.runtime
                .block_on(async { self.presenter.submit_for_prediction(input).await })
        })
    }
}

#[pymethods]
impl LeafScanClient {
    /// Create a new LeafScanClient instance.
    ///
    /// Args:
    ///     config (ServerConfig): Base URL and endpoint paths of the server
    ///     enable_logs (bool): Emit tracing events to stderr. Defaults to False.
    ///
    /// Returns:
    ///     LeafScanClient: A new client with an empty result panel and history
    #[new]
    #[pyo3(signature = (config, enable_logs=false))]
    pub fn new(config: ServerConfig, enable_logs: bool) -> PyResult<Self> {
        if enable_logs {
            init_tracing();
        }
        let runtime = Runtime::new()
            .map_err(|e| PyRuntimeError::new_err(format!("Failed to start async runtime: {}", e)))?;

        Ok(Self {
            runtime,
            presenter: ResultPresenter::new(HttpScanBackend::new(config)),
            history: HistoryBoard::default(),
        })
    }

    /// Upload a local image file for prediction.
    ///
    /// Args:
    ///     path (str): Path to a leaf image (jpg, png, bmp, gif, webp, tiff)
    ///
    /// Returns:
    ///     PanelState: The result panel after the prediction and, for a
    ///         confident match, the assistant's description
    ///
    /// Example:
    ///     >>> panel = client.predict_file("/leaves/tomato.jpg")
    ///     >>> if panel.low_confidence:
    ///     ...     print(panel.assistant_body)
    #[pyo3(signature = (path))]
    pub fn predict_file(&self, py: Python, path: String) -> PanelState {
        self.submit(py, ImageInput::file(path))
    }

    /// Upload in-memory image bytes, as a dropped file would be.
    ///
    /// Args:
    ///     file_name (str): Name sent with the upload; its extension picks the content type
    ///     data (bytes): The image
    ///
    /// Returns:
    ///     PanelState: The result panel after the workflow completes
    #[pyo3(signature = (file_name, data))]
    pub fn predict_upload(&self, py: Python, file_name: String, data: Vec<u8>) -> PanelState {
        self.submit(py, ImageInput::upload(file_name, data))
    }

    /// Submit a camera frame already encoded as a data URL.
    ///
    /// Args:
    ///     data_url (str): e.g. 'data:image/png;base64,iVBORw0...'
    ///
    /// Returns:
    ///     PanelState: The result panel after the workflow completes
    #[pyo3(signature = (data_url))]
    pub fn predict_capture(&self, py: Python, data_url: String) -> PanelState {
        self.submit(py, ImageInput::capture(data_url))
    }

    /// Submit raw PNG bytes of a camera frame.
    #[pyo3(signature = (data))]
    pub fn predict_capture_png(&self, py: Python, data: Vec<u8>) -> PanelState {
        self.submit(py, ImageInput::capture_png(&data))
    }

    /// The result panel as it stands now.
    pub fn panel(&self) -> PanelState {
        self.presenter.panel()
    }

    /// Replace the displayed history with `entries`.
    pub fn load_history(&self, entries: Vec<DetectionEntry>) {
        self.history.replace(entries);
    }

    pub fn history(&self) -> Vec<DetectionEntry> {
        self.history.entries()
    }

    /// Filter the displayed history by crop or disease name.
    ///
    /// Args:
    ///     query (str): Case-insensitive text; blank shows everything
    ///
    /// Returns:
    ///     HistoryFilter: Matching entries and whether a "no results" message applies
    pub fn filter_history(&self, query: &str) -> HistoryFilter {
        self.history.filter(query)
    }

    /// Delete a detection after the user confirms.
    ///
    /// Args:
    ///     detection_id (str): Id of the history entry
    ///     confirm (Callable[[str], bool]): Called once with the confirmation
    ///         prompt; a falsy answer cancels without contacting the server
    ///
    /// Returns:
    ///     DeleteReport: What happened and the alert text to show, if any
    ///
    /// Example:
    ///     >>> report = client.delete_detection("42", lambda prompt: True)
    ///     >>> if report.alert:
    ///     ...     print(report.alert)
    #[pyo3(signature = (detection_id, confirm))]
    pub fn delete_detection(
        &self,
        py: Python,
        detection_id: String,
        confirm: Bound<'_, PyAny>,
    ) -> PyResult<DeleteReport> {
        // The prompt must be answered with the GIL held, before any request.
        let confirmed = confirm.call1((DELETE_PROMPT,))?.is_truthy()?;

        let outcome = py.detach(|| {
            self.runtime.block_on(async {
                delete_detection(
                    self.presenter.backend(),
                    &self.history,
                    &detection_id,
                    |_| confirmed,
                )
                .await
            })
        });

        Ok(DeleteReport::from_outcome(&detection_id, &outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::exceptions::PyZeroDivisionError;
    use pyo3::types::{PyDict, PyList};

    fn client_with_history(base_url: &str) -> LeafScanClient {
        let client = LeafScanClient::new(ServerConfig::with_base_url(base_url), false).unwrap();
        client.load_history(vec![DetectionEntry::new(
            "4".into(),
            "Tomato___Early_blight".into(),
            92.3,
            "/u/4.png".into(),
        )]);
        client
    }

    /// An address nothing listens on.
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn falsy_answer_cancels_and_sees_prompt() {
        Python::initialize();
        Python::attach(|py| {
            let client = client_with_history(&closed_port_url());
            let seen = PyList::empty(py);
            let globals = PyDict::new(py);
            globals.set_item("seen", &seen).unwrap();
            // list.append returns None
            let confirm = py
                .eval(c"lambda prompt: seen.append(prompt)", Some(&globals), None)
                .unwrap();

            let report = client.delete_detection(py, "4".into(), confirm).unwrap();

            assert_eq!(report.status, "cancelled");
            assert_eq!(report.alert, None);
            assert_eq!(seen.len(), 1);
            assert_eq!(seen.get_item(0).unwrap().extract::<String>().unwrap(), DELETE_PROMPT);
            assert_eq!(client.history().len(), 1);
        });
    }

    #[test]
    fn truthy_answer_sends_the_request() {
        Python::initialize();
        Python::attach(|py| {
            let client = client_with_history(&closed_port_url());
            let confirm = py.eval(c"lambda prompt: [prompt]", None, None).unwrap();

            let report = client.delete_detection(py, "4".into(), confirm).unwrap();

            // the request went out and hit a closed port
            assert_eq!(report.status, "failed");
            assert!(!report.removed);
            assert!(report.alert.is_some());
            assert_eq!(client.history().len(), 1);
        });
    }

    #[test]
    fn raising_confirmation_propagates() {
        Python::initialize();
        Python::attach(|py| {
            let client = client_with_history(&closed_port_url());
            let confirm = py.eval(c"lambda prompt: 1 / 0", None, None).unwrap();

            let err = client.delete_detection(py, "4".into(), confirm).unwrap_err();

            assert!(err.is_instance_of::<PyZeroDivisionError>(py));
            assert_eq!(client.history().len(), 1);
        });
    }
}
