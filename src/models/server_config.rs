use pyo3::prelude::*;

#[pyclass]
#[derive(Clone, Debug)]
#[pyo3(from_py_object)]
/// Where the plant-disease server lives.
///
/// # Fields
///
/// * `base_url` - Scheme and host of the server, e.g. `http://localhost:5000`.
///   A trailing slash is ignored.
/// * `predict_path`, `capture_path`, `info_path`, `delete_path` - Endpoint
///   paths, defaulting to the routes the server registers.
pub struct ServerConfig {
    #[pyo3(get)]
    pub base_url: String,
    #[pyo3(get)]
    pub predict_path: String,
    #[pyo3(get)]
    pub capture_path: String,
    #[pyo3(get)]
    pub info_path: String,
    #[pyo3(get)]
    pub delete_path: String,
}

#[pymethods]
impl ServerConfig {
    #[new]
    #[pyo3(signature=(base_url, predict_path="/predict", capture_path="/capture", info_path="/get_info", delete_path="/delete"))]
    pub fn new(
        base_url: &str,
        predict_path: &str,
        capture_path: &str,
        info_path: &str,
        delete_path: &str,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            predict_path: predict_path.to_string(),
            capture_path: capture_path.to_string(),
            info_path: info_path.to_string(),
            delete_path: delete_path.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(base_url, "/predict", "/capture", "/get_info", "/delete")
    }

    pub fn predict_url(&self) -> String {
        self.join(&self.predict_path)
    }

    pub fn capture_url(&self) -> String {
        self.join(&self.capture_path)
    }

    pub fn info_url(&self) -> String {
        self.join(&self.info_path)
    }

    pub fn delete_url(&self, id: &str) -> String {
        format!("{}/{}", self.join(self.delete_path.trim_end_matches('/')), id)
    }

    fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_routes() {
        let config = ServerConfig::with_base_url("http://localhost:5000/");
        assert_eq!(config.predict_url(), "http://localhost:5000/predict");
        assert_eq!(config.capture_url(), "http://localhost:5000/capture");
        assert_eq!(config.info_url(), "http://localhost:5000/get_info");
        assert_eq!(config.delete_url("42"), "http://localhost:5000/delete/42");
    }

    #[test]
    fn relative_paths_are_joined() {
        let config = ServerConfig::new("http://leaf.local", "api/predict", "/capture", "/get_info", "/delete/");
        assert_eq!(config.predict_url(), "http://leaf.local/api/predict");
        assert_eq!(config.delete_url("7"), "http://leaf.local/delete/7");
    }
}
