//! Curated image galleries over the asset list.

use crate::assets::{is_image, parent_folder};
use serde::Serialize;
use std::collections::BTreeMap;

/// A titled group of image paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetGroup {
    pub title: String,
    pub assets: Vec<String>,
}

/// Curated gallery kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Gallery {
    /// Full member card illustrations
    MemberCards,
    /// Member icons, grouped by folder
    MemberIcons,
    /// Story scene backgrounds
    StoryBackgrounds,
    /// Story still images
    StoryStills,
    /// Battle backgrounds
    BattleBackgrounds,
}

impl Gallery {
    pub fn title(&self) -> &'static str {
        match self {
            Gallery::MemberCards => "Member Cards",
            Gallery::MemberIcons => "Member Icons",
            Gallery::StoryBackgrounds => "Story Backgrounds",
            Gallery::StoryStills => "Story Stills",
            Gallery::BattleBackgrounds => "Battle Backgrounds",
        }
    }

    /// Whether an image path belongs to this gallery (path markers only)
    fn accepts(&self, path: &str) -> bool {
        match self {
            Gallery::MemberCards => path.contains("MemberCardFull"),
            Gallery::MemberIcons => {
                path.contains("Icon") && path.contains("Member") && !path.contains("Ticket")
            }
            Gallery::StoryBackgrounds => path.contains("Story/Prefab/Background"),
            Gallery::StoryStills => path.contains("Story/Prefab/Sprite/Still"),
            Gallery::BattleBackgrounds => {
                path.contains("BattleBG/Prefabs") && path.contains("bg_battle")
            }
        }
    }

    /// Image paths of this gallery, in input order
    pub fn filter<S: AsRef<str>>(&self, paths: &[S]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| self.accepts(p) && is_image(p))
            .map(str::to_string)
            .collect()
    }

    /// Groups to display for this gallery
    pub fn groups<S: AsRef<str>>(&self, paths: &[S]) -> Vec<AssetGroup> {
        let assets = self.filter(paths);
        match self {
            Gallery::MemberIcons => group_by_folder(assets),
            _ => vec![AssetGroup {
                title: self.title().to_string(),
                assets,
            }],
        }
    }
}

/// Group paths by parent folder; folders ascend and paths are sorted within each.
fn group_by_folder(paths: Vec<String>) -> Vec<AssetGroup> {
    let mut folders: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in paths {
        folders
            .entry(parent_folder(&path).to_string())
            .or_default()
            .push(path);
    }

    folders
        .into_iter()
        .map(|(title, mut assets)| {
            assets.sort();
            AssetGroup { title, assets }
        })
        .collect()
}

/// Image paths grouped by parent folder. Folders ascend; paths keep input order.
pub fn image_folders<S: AsRef<str>>(paths: &[S]) -> BTreeMap<String, Vec<String>> {
    let mut folders: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in paths.iter().map(|p| p.as_ref()).filter(|p| is_image(p)) {
        folders
            .entry(parent_folder(path).to_string())
            .or_default()
            .push(path.to_string());
    }
    folders
}
