//! Tree construction from slash-delimited asset paths.

use super::{Node, NodeKind};
use crate::error::{AssetBrowserError, Result};
use serde::{Deserialize, Serialize};

/// How to resolve a segment that one path uses as a file and another as a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// The path processed last decides the kind; the earlier node is replaced
    #[default]
    LastWriteWins,
    /// Fail the build with `KindConflict`
    Reject,
}

/// Options for building the tree
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub conflict_policy: ConflictPolicy,
    /// Reject paths with empty segments instead of creating empty-named nodes
    pub strict_segments: bool,
}

/// Build the asset tree with last-write-wins conflicts and lenient segments.
pub fn build_tree<I, S>(paths: I) -> Node
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = Node::root();
    for path in paths {
        insert_lenient(&mut root, path.as_ref());
    }
    root
}

/// Build the asset tree, surfacing conflicts and malformed paths per `options`.
pub fn build_tree_with<I, S>(paths: I, options: &TreeOptions) -> Result<Node>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = Node::root();
    let mut count = 0usize;
    for path in paths {
        insert_path(&mut root, path.as_ref(), options)?;
        count += 1;
    }
    tracing::debug!(
        "Built asset tree from {} paths ({} directories)",
        count,
        root.dir_count()
    );
    Ok(root)
}

fn insert_lenient(root: &mut Node, path: &str) {
    if let Err(e) = insert_path(root, path, &TreeOptions::default()) {
        // Only reachable if the root itself is not a directory
        tracing::warn!("Skipping '{}': {}", path, e);
    }
}

/// Insert one path below `root`.
fn insert_path(root: &mut Node, path: &str, options: &TreeOptions) -> Result<()> {
    let segments: Vec<&str> = path.split('/').collect();

    if options.strict_segments && segments.iter().any(|s| s.is_empty()) {
        return Err(AssetBrowserError::InvalidPath(path.to_string()));
    }

    let Some((file_name, dirs)) = segments.split_last() else {
        return Ok(());
    };

    let mut children = root
        .kind
        .children_mut()
        .ok_or_else(|| AssetBrowserError::InvalidInput("tree root is not a directory".into()))?;

    for (depth, segment) in dirs.iter().enumerate() {
        let dir_path = segments[..=depth].join("/");
        let entry = children
            .entry((*segment).to_string())
            .or_insert_with(|| Node::directory(*segment, dir_path.clone()));

        if entry.is_file() {
            resolve_conflict(options.conflict_policy, &dir_path, "file", "directory")?;
            *entry = Node::directory(*segment, dir_path.clone());
        }

        children = entry.kind.children_mut().ok_or_else(|| AssetBrowserError::KindConflict {
            path: dir_path,
            existing: NodeKind::File.name(),
            incoming: "directory",
        })?;
    }

    if children.get(*file_name).is_some_and(Node::is_dir) {
        resolve_conflict(options.conflict_policy, path, "directory", "file")?;
    }
    children.insert((*file_name).to_string(), Node::file(*file_name, path));

    Ok(())
}

fn resolve_conflict(
    policy: ConflictPolicy,
    path: &str,
    existing: &'static str,
    incoming: &'static str,
) -> Result<()> {
    match policy {
        ConflictPolicy::LastWriteWins => {
            tracing::debug!(
                "Replacing {} '{}' with a {} (last write wins)",
                existing,
                path,
                incoming
            );
            Ok(())
        }
        ConflictPolicy::Reject => Err(AssetBrowserError::KindConflict {
            path: path.to_string(),
            existing,
            incoming,
        }),
    }
}
