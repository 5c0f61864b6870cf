//! Tree rendering logic for ASCII tree output.

use super::listing::compare_entries;
use super::Node;
use crate::utils::format_count;

/// Options for rendering the tree
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Maximum depth to descend below the start node (None = unlimited)
    pub max_depth: Option<usize>,
    /// Annotate directories with their file counts
    pub show_count: bool,
    /// Hide summary line
    pub no_summary: bool,
}

/// Render the tree to a string
pub fn render_tree(node: &Node, options: &RenderOptions) -> String {
    let mut output = String::new();

    // Render the start path ("." for the root)
    if node.path.is_empty() {
        output.push('.');
    } else {
        output.push_str(&node.path);
    }
    output.push('\n');

    render_children(&mut output, node, "", 0, options);

    if !options.no_summary {
        output.push('\n');
        output.push_str(&format_summary(node));
        output.push('\n');
    }

    output
}

fn render_children(
    output: &mut String,
    node: &Node,
    prefix: &str,
    depth: usize,
    options: &RenderOptions,
) {
    if options.max_depth.is_some_and(|max| depth >= max) {
        return;
    }

    let mut children: Vec<&Node> = match node.children() {
        Some(children) => children.values().collect(),
        None => return,
    };
    children.sort_by(|a, b| compare_entries(a, b));

    let children_count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let is_last = i == children_count - 1;
        render_node(output, child, prefix, is_last, depth, options);
    }
}

/// Render a single node recursively
fn render_node(
    output: &mut String,
    node: &Node,
    prefix: &str,
    is_last: bool,
    depth: usize,
    options: &RenderOptions,
) {
    let connector = if is_last { "└── " } else { "├── " };

    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(&format_label(node, options));
    output.push('\n');

    if node.is_dir() {
        let new_prefix = format!("{}{}   ", prefix, if is_last { " " } else { "│" });
        render_children(output, node, &new_prefix, depth + 1, options);
    }
}

fn format_label(node: &Node, options: &RenderOptions) -> String {
    if !node.is_dir() {
        return node.name.clone();
    }
    if options.show_count {
        format!("{}/ ({})", node.name, files_label(node.file_count()))
    } else {
        format!("{}/", node.name)
    }
}

fn files_label(count: u64) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", format_count(count))
    }
}

/// Format the summary line
fn format_summary(node: &Node) -> String {
    let dirs = node.dir_count();
    let dirs_str = if dirs == 1 {
        "1 directory".to_string()
    } else {
        format!("{} directories", format_count(dirs))
    };
    format!("Total: {}, {}", files_label(node.file_count()), dirs_str)
}
