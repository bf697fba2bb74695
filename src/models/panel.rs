use pyo3::prelude::*;
use serde::Serialize;

use crate::impl_to_dict;

#[pyclass(eq, eq_int)]
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Neutral,
    Positive,
    Negative,
}

/// How the assistant box body should be rendered by the front end.
#[pyclass(eq, eq_int)]
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssistantFormat {
    #[default]
    Emphasized,
    Markdown,
}

/// Snapshot of the result panel.
///
/// Everything a front end needs to draw the panel: visibility flags, the
/// submitted image, the labels, the confidence line and the assistant box.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
#[pyclass]
pub struct PanelState {
    #[pyo3(get)]
    pub visible: bool,
    #[pyo3(get)]
    pub loading: bool,
    #[pyo3(get)]
    pub file_name: Option<String>,
    #[pyo3(get)]
    pub image_url: Option<String>,
    #[pyo3(get)]
    pub crop: String,
    #[pyo3(get)]
    pub disease: String,
    #[pyo3(get)]
    pub confidence_text: String,
    #[pyo3(get)]
    pub low_confidence: bool,
    #[pyo3(get)]
    pub confidence_note: Option<String>,
    #[pyo3(get)]
    pub assistant_body: String,
    #[pyo3(get)]
    pub assistant_format: AssistantFormat,
    #[pyo3(get)]
    pub assistant_theme: Theme,
}
impl_to_dict!(PanelState);

impl PanelState {
    pub(crate) fn set_assistant(&mut self, body: impl Into<String>, format: AssistantFormat, theme: Theme) {
        self.assistant_body = body.into();
        self.assistant_format = format;
        self.assistant_theme = theme;
    }
}
