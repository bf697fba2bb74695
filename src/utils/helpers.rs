use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};

pub fn get_content_type(file_path: &str) -> &'static str {
    let path = Path::new(file_path);
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("bmp") => "image/bmp",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("tiff") | Some("tif") => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Encode raw image bytes the way a canvas `toDataURL` does.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_ignores_case() {
        assert_eq!(get_content_type("/tmp/leaf.JPG"), "image/jpeg");
        assert_eq!(get_content_type("leaf.png"), "image/png");
        assert_eq!(get_content_type("notes.txt"), "application/octet-stream");
        assert_eq!(get_content_type("no_extension"), "application/octet-stream");
    }

    #[test]
    fn data_url_prefix() {
        assert_eq!(to_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }
}
