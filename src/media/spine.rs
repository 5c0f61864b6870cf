//! Spine skeleton files and player configuration.

use crate::assets::join_url;
use serde::Serialize;

/// Animation played first; players fall back to none when a skeleton lacks it
pub const DEFAULT_ANIMATION: &str = "Wait1Loop";

/// Skeleton files among the asset paths: `.txt` entries that have a file name, sorted.
pub fn skeleton_files<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    let mut files: Vec<String> = paths
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| p.ends_with(".txt") && !p.ends_with("/.txt"))
        .map(str::to_string)
        .collect();
    files.sort();
    files
}

/// Configuration handed to a Spine web player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinePlayerConfig {
    pub json_url: String,
    pub atlas_url: String,
    pub premultiplied_alpha: bool,
    pub background_color: String,
    pub alpha: bool,
    pub show_controls: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
}

impl SpinePlayerConfig {
    pub fn for_skeleton(asset_base: &str, path: &str) -> Self {
        let json_url = join_url(asset_base, path);
        let atlas_url = json_url.replacen(".txt", ".atlas", 1);
        Self {
            json_url,
            atlas_url,
            premultiplied_alpha: true,
            background_color: "#00000000".to_string(),
            alpha: true,
            show_controls: true,
            animation: Some(DEFAULT_ANIMATION.to_string()),
        }
    }

    /// Fallback used when the default animation is missing from the skeleton
    pub fn without_animation(mut self) -> Self {
        self.animation = None;
        self
    }
}
