//! Browser tabs and the per-session navigation state.

use crate::error::{AssetBrowserError, Result};
use crate::tree::{current_directory_contents, DirectoryListing, Node};
use std::str::FromStr;

/// The tabs of the browser, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Files,
    ImageFolders,
    MemberCards,
    MemberIcons,
    StoryBackgrounds,
    StoryStills,
    SpineAnimations,
    Stories,
    Videos,
    Music,
    Sounds,
    Search,
}

impl View {
    pub const ALL: [View; 12] = [
        View::Files,
        View::ImageFolders,
        View::MemberCards,
        View::MemberIcons,
        View::StoryBackgrounds,
        View::StoryStills,
        View::SpineAnimations,
        View::Stories,
        View::Videos,
        View::Music,
        View::Sounds,
        View::Search,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            View::Files => "files",
            View::ImageFolders => "image-folders",
            View::MemberCards => "member-cards",
            View::MemberIcons => "member-icons",
            View::StoryBackgrounds => "story-backgrounds",
            View::StoryStills => "story-stills",
            View::SpineAnimations => "spine-animations",
            View::Stories => "stories",
            View::Videos => "videos",
            View::Music => "music",
            View::Sounds => "sounds",
            View::Search => "search",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Files => "Files",
            View::ImageFolders => "Images",
            View::MemberCards => "Member Cards",
            View::MemberIcons => "Member Icons",
            View::StoryBackgrounds => "Story BG",
            View::StoryStills => "Story Stills",
            View::SpineAnimations => "Spines",
            View::Stories => "Stories",
            View::Videos => "Videos",
            View::Music => "Music",
            View::Sounds => "Sounds",
            View::Search => "Search",
        }
    }

    /// Route of the view; the file browser lives at `/`
    pub fn route(&self) -> String {
        match self {
            View::Files => "/".to_string(),
            other => format!("/{}", other.id()),
        }
    }

    /// Resolve a route such as `/member-cards`; unknown routes fall back to the default view.
    pub fn from_route(route: &str) -> Self {
        route
            .trim_start_matches('/')
            .parse()
            .unwrap_or_default()
    }
}

impl FromStr for View {
    type Err = AssetBrowserError;

    fn from_str(s: &str) -> Result<Self> {
        View::ALL
            .iter()
            .copied()
            .find(|view| view.id() == s)
            .ok_or_else(|| AssetBrowserError::InvalidInput(format!("Unknown view: {}", s)))
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Interaction state of one browsing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserSession {
    pub view: View,
    pub current_path: Vec<String>,
    pub selected_asset: Option<String>,
}

impl BrowserSession {
    pub fn new(view: View) -> Self {
        Self {
            view,
            ..Default::default()
        }
    }

    /// Session positioned at a slash-delimited directory path
    pub fn at_path(path: &str) -> Self {
        Self {
            current_path: split_segments(path),
            ..Default::default()
        }
    }

    /// Open a node: directories are entered, files become the selection.
    pub fn enter(&mut self, node: &Node) {
        if node.is_dir() {
            self.current_path.push(node.name.clone());
        } else {
            self.selected_asset = Some(node.path.clone());
        }
    }

    /// Jump to a breadcrumb: `None` is the root, `Some(i)` keeps the first `i + 1` segments.
    pub fn navigate_to(&mut self, index: Option<usize>) {
        match index {
            None => self.current_path.clear(),
            Some(i) => self.current_path.truncate(i + 1),
        }
    }

    pub fn switch_view(&mut self, view: View) {
        self.view = view;
    }

    /// Breadcrumb labels, starting with `root`
    pub fn breadcrumbs(&self) -> Vec<&str> {
        std::iter::once("root")
            .chain(self.current_path.iter().map(String::as_str))
            .collect()
    }

    pub fn listing<'a>(&self, tree: &'a Node) -> DirectoryListing<'a> {
        current_directory_contents(tree, &self.current_path)
    }
}

/// Split a user-supplied directory path into segments, ignoring stray slashes
pub fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    #[test]
    fn test_view_ids_roundtrip() {
        for view in View::ALL {
            assert_eq!(view.id().parse::<View>().unwrap(), view);
        }
        assert!("gallery".parse::<View>().is_err());
    }

    #[test]
    fn test_from_route() {
        assert_eq!(View::from_route("/member-cards"), View::MemberCards);
        assert_eq!(View::from_route("search"), View::Search);
        assert_eq!(View::from_route("/"), View::Files);
        assert_eq!(View::from_route(""), View::Files);
        assert_eq!(View::from_route("/nope"), View::Files);
    }

    #[test]
    fn test_routes_and_labels() {
        assert_eq!(View::Files.route(), "/");
        assert_eq!(View::StoryBackgrounds.route(), "/story-backgrounds");
        assert_eq!(View::ImageFolders.label(), "Images");
        assert_eq!(View::ALL[0], View::default());
        assert_eq!(View::ALL[11], View::Search);
    }

    #[test]
    fn test_session_enter_and_navigate() {
        let tree = build_tree(["Unit/Icon/a.png", "Unit/b.png"]);
        let mut session = BrowserSession::default();

        session.enter(tree.child("Unit").unwrap());
        session.enter(tree.find("Unit/Icon").unwrap());
        assert_eq!(session.current_path, vec!["Unit", "Icon"]);
        assert_eq!(session.breadcrumbs(), vec!["root", "Unit", "Icon"]);

        session.enter(tree.find("Unit/Icon/a.png").unwrap());
        assert_eq!(session.selected_asset.as_deref(), Some("Unit/Icon/a.png"));
        assert_eq!(session.current_path.len(), 2);

        session.navigate_to(Some(0));
        assert_eq!(session.current_path, vec!["Unit"]);
        let names: Vec<&str> = session
            .listing(&tree)
            .contents
            .into_iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["Icon", "b.png"]);

        session.navigate_to(None);
        assert!(session.current_path.is_empty());
        assert_eq!(session.listing(&tree).parent_path, None);
    }

    #[test]
    fn test_stale_session_after_rebuild() {
        let mut session = BrowserSession::at_path("/Old/Dir/");
        assert_eq!(session.current_path, vec!["Old", "Dir"]);

        let tree = build_tree(["New/a.png"]);
        assert!(session.listing(&tree).contents.is_empty());

        session.switch_view(View::Search);
        assert_eq!(session.view, View::Search);
    }
}
