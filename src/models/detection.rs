use std::sync::Mutex;

use pyo3::prelude::*;
use serde::Serialize;

use crate::impl_to_dict;
use crate::labels::parse_label;

/// A persisted detection as listed on the history dashboard.
#[pyclass]
#[derive(Serialize, Clone, Debug, PartialEq)]
#[pyo3(from_py_object)]
pub struct DetectionEntry {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub prediction: String,
    #[pyo3(get)]
    pub confidence: f64,
    #[pyo3(get)]
    pub image_url: String,
}

#[pymethods]
impl DetectionEntry {
    #[new]
    #[pyo3(signature = (id, prediction, confidence, image_url))]
    pub fn new(id: String, prediction: String, confidence: f64, image_url: String) -> Self {
        Self {
            id,
            prediction,
            confidence,
            image_url,
        }
    }
}

impl DetectionEntry {
    fn matches(&self, needle: &str) -> bool {
        let labels = parse_label(&self.prediction);
        [labels.crop.as_str(), labels.disease.as_str(), self.prediction.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Result of filtering the history board.
#[pyclass]
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HistoryFilter {
    #[pyo3(get)]
    pub visible: Vec<DetectionEntry>,
    /// Set when a non-empty board has nothing matching.
    #[pyo3(get)]
    pub no_results: bool,
}
impl_to_dict!(HistoryFilter);

/// The detection entries currently on display.
#[derive(Debug, Default)]
pub struct HistoryBoard {
    entries: Mutex<Vec<DetectionEntry>>,
}

impl HistoryBoard {
    pub fn new(entries: Vec<DetectionEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn replace(&self, entries: Vec<DetectionEntry>) {
        *self.lock() = entries;
    }

    pub fn entries(&self) -> Vec<DetectionEntry> {
        self.lock().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().iter().any(|entry| entry.id == id)
    }

    /// Drop the entry with `id`; false when it was not on display.
    pub fn remove(&self, id: &str) -> bool {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        entries.len() != before
    }

    pub fn filter(&self, query: &str) -> HistoryFilter {
        let entries = self.lock();
        let needle = query.trim().to_lowercase();
        let visible: Vec<DetectionEntry> = if needle.is_empty() {
            entries.clone()
        } else {
            entries.iter().filter(|entry| entry.matches(&needle)).cloned().collect()
        };
        HistoryFilter {
            no_results: !entries.is_empty() && visible.is_empty(),
            visible,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DetectionEntry>> {
        // entries are plain data; a poisoned lock still holds a usable list
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
