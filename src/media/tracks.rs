//! Video and music lists: entries split into category folder and file name.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEntry {
    pub path: String,
    /// Everything before the last segment
    pub category: String,
    pub name: String,
}

impl MediaEntry {
    pub fn parse(path: &str) -> Self {
        let (category, name) = match path.rsplit_once('/') {
            Some((category, name)) => (category, name),
            None => ("", path),
        };
        Self {
            path: path.to_string(),
            category: category.to_string(),
            name: name.to_string(),
        }
    }

    /// `category/name` as shown in list views
    pub fn label(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }
}

/// Parse and order media paths by category, then by name.
pub fn sort_tracks<S: AsRef<str>>(paths: &[S]) -> Vec<MediaEntry> {
    let mut entries: Vec<MediaEntry> = paths.iter().map(|p| MediaEntry::parse(p.as_ref())).collect();
    entries.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
    entries
}
