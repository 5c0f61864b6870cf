//! Tree command - display the asset hierarchy.

use super::load_tree;
use crate::cli::args::TreeArgs;
use crate::context::AppContext;
use crate::error::{AssetBrowserError, Result};
use crate::tree::{render_tree, RenderOptions};

pub async fn run_tree(args: TreeArgs, ctx: &AppContext) -> Result<()> {
    let (_, tree) = load_tree(ctx).await?;

    let start = args.path.trim_matches('/');
    let node = tree
        .find(start)
        .filter(|node| node.is_dir())
        .ok_or_else(|| AssetBrowserError::PathNotFound(start.to_string()))?;

    let options = RenderOptions {
        max_depth: args.depth,
        show_count: args.count,
        no_summary: args.no_summary,
    };

    print!("{}", render_tree(node, &options));
    Ok(())
}
