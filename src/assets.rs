//! Extension-based asset classification and content URLs.

use serde::Serialize;

/// Broad category of an asset, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Text,
    Unknown,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Text => "text",
            FileType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "json", "md"];

/// Classify a path by the text after its last `.` (case-insensitive).
///
/// A path without any `.` is treated as if its whole text were the extension,
/// so `"png"` alone classifies as an image.
pub fn file_type(path: &str) -> FileType {
    let extension = path
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        FileType::Image
    } else if TEXT_EXTENSIONS.contains(&extension.as_str()) {
        FileType::Text
    } else {
        FileType::Unknown
    }
}

pub fn is_image(path: &str) -> bool {
    file_type(path) == FileType::Image
}

pub fn is_text(path: &str) -> bool {
    file_type(path) == FileType::Text
}

/// Join a content base and a relative path with exactly one `/`.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Parent folder of a path (all but the last segment), empty for top-level entries.
pub fn parent_folder(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}
