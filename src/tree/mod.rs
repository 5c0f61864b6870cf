//! Virtual file tree built from the flat asset path list.

pub mod build;
pub mod listing;
pub mod render;

pub use build::{build_tree, build_tree_with, ConflictPolicy, TreeOptions};
pub use listing::{current_directory_contents, list_children, DirectoryListing};
pub use render::{render_tree, RenderOptions};

use serde::Serialize;
use std::collections::BTreeMap;

/// A directory or file in the asset tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Last path segment (empty for the root)
    pub name: String,
    /// Full path from the root, segments joined by `/` (empty for the root)
    pub path: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// What a node is. The kind of a node is fixed once it is created; a
/// conflicting insert replaces the whole node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Directory { children: BTreeMap<String, Node> },
    File,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Directory { .. } => "directory",
            NodeKind::File => "file",
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File => None,
        }
    }
}

impl Node {
    /// Create the root directory
    pub fn root() -> Self {
        Self::directory("", "")
    }

    /// Create an empty directory node
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    /// Create a file node
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File)
    }

    /// Children of a directory, `None` for files
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File => None,
        }
    }

    /// Direct child with the given segment name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().and_then(|children| children.get(name))
    }

    /// Walk down from this node along the segments of `path`.
    ///
    /// An empty path resolves to the node itself.
    pub fn find(&self, path: &str) -> Option<&Node> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('/')
            .try_fold(self, |current, segment| current.child(segment))
    }

    /// Number of files in this subtree
    pub fn file_count(&self) -> u64 {
        match &self.kind {
            NodeKind::File => 1,
            NodeKind::Directory { children } => children.values().map(Node::file_count).sum(),
        }
    }

    /// Number of directories below this node (not counting itself)
    pub fn dir_count(&self) -> u64 {
        self.children()
            .map(|children| {
                children
                    .values()
                    .filter(|c| c.is_dir())
                    .map(|c| 1 + c.dir_count())
                    .sum()
            })
            .unwrap_or(0)
    }
}
