use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::{fs::File, io::AsyncReadExt};

use crate::utils::{get_content_type, to_data_url};

/// Name the server stores camera captures under.
pub const CAPTURE_FILE_NAME: &str = "captured.png";

/// An image the user picked, dropped, or captured.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageInput {
    /// Local file, uploaded as multipart `file`.
    File { path: PathBuf },
    /// In-memory file, uploaded as multipart `file`.
    Upload { file_name: String, bytes: Vec<u8> },
    /// Camera frame as a `data:` URL, sent as JSON to the capture endpoint.
    Capture { data_url: String },
}

/// A file ready for the multipart form.
#[derive(Debug)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageInput::File { path: path.into() }
    }

    pub fn upload(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        ImageInput::Upload {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn capture(data_url: impl Into<String>) -> Self {
        ImageInput::Capture {
            data_url: data_url.into(),
        }
    }

    pub fn capture_png(bytes: &[u8]) -> Self {
        ImageInput::capture(to_data_url("image/png", bytes))
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, ImageInput::Capture { .. })
    }

    pub fn display_name(&self) -> String {
        match self {
            ImageInput::File { path } => file_name_of(path),
            ImageInput::Upload { file_name, .. } => file_name.clone(),
            ImageInput::Capture { .. } => CAPTURE_FILE_NAME.to_string(),
        }
    }

    /// Load the bytes for a multipart upload.
    pub async fn read_upload(&self) -> anyhow::Result<UploadFile> {
        match self {
            ImageInput::File { path } => {
                let mut file = File::open(path)
                    .await
                    .with_context(|| format!("Failed to open file {}", path.display()))?;
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes)
                    .await
                    .with_context(|| format!("Failed to read file {}", path.display()))?;
                let file_name = file_name_of(path);
                Ok(UploadFile {
                    content_type: get_content_type(&file_name),
                    file_name,
                    bytes,
                })
            }
            ImageInput::Upload { file_name, bytes } => Ok(UploadFile {
                file_name: file_name.clone(),
                content_type: get_content_type(file_name),
                bytes: bytes.clone(),
            }),
            ImageInput::Capture { .. } => anyhow::bail!("camera captures are sent as data URLs, not uploads"),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
