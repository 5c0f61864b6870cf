//! Command implementations.

pub mod config;
pub mod files;
pub mod gallery;
pub mod media;
pub mod open;
pub mod search;
pub mod show;
pub mod summary;
pub mod tree;
pub mod views;

pub use config::run_config;
pub use files::run_files;
pub use gallery::{run_gallery, run_images};
pub use media::{run_music, run_sounds, run_spines, run_stories, run_videos};
pub use open::run_open;
pub use search::run_search;
pub use show::run_show;
pub use summary::run_summary;
pub use tree::run_tree;
pub use views::run_views;

use crate::catalog::Catalog;
use crate::context::AppContext;
use crate::error::Result;
use crate::tree::{build_tree_with, Node};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// Spinner shown on stderr while catalog lists load
pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load a single catalog list. Failures propagate so the command exits non-zero.
pub(crate) async fn load_catalog(ctx: &AppContext, catalog: Catalog) -> Result<Vec<String>> {
    let client = ctx.client()?;
    let pb = spinner(format!("Loading {} list...", catalog));
    let result = client.load(catalog).await;
    pb.finish_and_clear();
    result
}

/// Load the asset list and build the directory tree with the configured options.
pub(crate) async fn load_tree(ctx: &AppContext) -> Result<(Vec<String>, Node)> {
    let assets = load_catalog(ctx, Catalog::Assets).await?;
    let tree = build_tree_with(&assets, &ctx.config.tree.to_tree_options())?;
    Ok((assets, tree))
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
