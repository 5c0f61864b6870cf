//! Directory listing over the asset tree.

use super::Node;
use crate::error::{AssetBrowserError, Result};
use std::cmp::Ordering;

/// Contents of the directory currently being browsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing<'a> {
    /// Segments of the parent directory; `None` at the root
    pub parent_path: Option<Vec<String>>,
    pub contents: Vec<&'a Node>,
}

/// List the direct children of the directory at `segments`.
///
/// Directories come before files; names ascend by code point within each
/// group, so `"B" < "a"`.
pub fn list_children<'a, S: AsRef<str>>(root: &'a Node, segments: &[S]) -> Result<Vec<&'a Node>> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        current = current
            .child(segment.as_ref())
            .filter(|node| node.is_dir())
            .ok_or_else(|| AssetBrowserError::PathNotFound(join_segments(&segments[..=depth])))?;
    }

    let mut contents: Vec<&Node> = current
        .children()
        .map(|children| children.values().collect())
        .unwrap_or_default();
    contents.sort_by(|a, b| compare_entries(a, b));
    Ok(contents)
}

/// Listing for the browser view. A path that no longer exists in the tree
/// yields an empty listing instead of an error.
pub fn current_directory_contents<'a, S: AsRef<str>>(
    root: &'a Node,
    segments: &[S],
) -> DirectoryListing<'a> {
    let parent_path = if segments.is_empty() {
        None
    } else {
        Some(
            segments[..segments.len() - 1]
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
        )
    };

    let contents = match list_children(root, segments) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!("{}", e);
            Vec::new()
        }
    };

    DirectoryListing {
        parent_path,
        contents,
    }
}

/// Directories first, then by name
pub fn compare_entries(a: &Node, b: &Node) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name.cmp(&b.name))
}

fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    fn names(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.name.clone()).collect()
    }

    #[test]
    fn test_root_listing_directories_first() {
        let tree = build_tree(["b/x.png", "a/y.png", "a.txt"]);
        let children = list_children::<&str>(&tree, &[]).unwrap();
        assert_eq!(names(&children), vec!["a", "b", "a.txt"]);
        assert!(children[0].is_dir());
        assert!(children[1].is_dir());
        assert!(children[2].is_file());
    }

    #[test]
    fn test_nested_listing() {
        let tree = build_tree([
            "Unit/Icon/b.png",
            "Unit/Icon/a.png",
            "Unit/Icon/Sub/c.png",
            "Unit/z.png",
        ]);
        let children = list_children(&tree, &["Unit", "Icon"]).unwrap();
        assert_eq!(names(&children), vec!["Sub", "a.png", "b.png"]);
        assert_eq!(children[1].path, "Unit/Icon/a.png");
    }

    #[test]
    fn test_ascii_ordering_is_code_point() {
        let tree = build_tree(["a.png", "B.png", "A.png", "_.png", "1.png"]);
        let children = list_children::<&str>(&tree, &[]).unwrap();
        assert_eq!(names(&children), vec!["1.png", "A.png", "B.png", "_.png", "a.png"]);
    }

    #[test]
    fn test_missing_segment_is_path_not_found() {
        let tree = build_tree(["Unit/a.png"]);
        let err = list_children(&tree, &["Unit", "Gone"]).unwrap_err();
        assert!(matches!(err, AssetBrowserError::PathNotFound(p) if p == "Unit/Gone"));
    }

    #[test]
    fn test_file_segment_is_path_not_found() {
        let tree = build_tree(["Unit/a.png"]);
        let err = list_children(&tree, &["Unit", "a.png"]).unwrap_err();
        assert!(matches!(err, AssetBrowserError::PathNotFound(_)));
    }

    #[test]
    fn test_current_directory_contents_root() {
        let tree = build_tree(["a/b.png", "c.png"]);
        let listing = current_directory_contents::<String>(&tree, &[]);
        assert_eq!(listing.parent_path, None);
        assert_eq!(names(&listing.contents), vec!["a", "c.png"]);
    }

    #[test]
    fn test_current_directory_contents_nested() {
        let tree = build_tree(["a/b/c.png"]);
        let segments = vec!["a".to_string(), "b".to_string()];
        let listing = current_directory_contents(&tree, &segments);
        assert_eq!(listing.parent_path, Some(vec!["a".to_string()]));
        assert_eq!(names(&listing.contents), vec!["c.png"]);
    }

    #[test]
    fn test_stale_path_yields_empty_listing() {
        let tree = build_tree(["a/b.png"]);
        let listing = current_directory_contents(&tree, &["x", "y"]);
        assert_eq!(listing.parent_path, Some(vec!["x".to_string()]));
        assert!(listing.contents.is_empty());
    }
}
