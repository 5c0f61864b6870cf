//! Show command - view a single asset by its type.

use super::load_catalog;
use crate::assets::{file_type, FileType};
use crate::catalog::Catalog;
use crate::cli::args::ShowArgs;
use crate::context::AppContext;
use crate::error::{AssetBrowserError, Result};
use crate::utils::{dim, warning};
use colored::Colorize;

pub async fn run_show(args: ShowArgs, ctx: &AppContext) -> Result<()> {
    let assets = load_catalog(ctx, Catalog::Assets).await?;
    let path = args.path.trim_start_matches('/');
    if !assets.iter().any(|asset| asset == path) {
        return Err(AssetBrowserError::PathNotFound(path.to_string()));
    }

    let url = ctx.config.source.asset_url(path);
    println!("{}", path.bold());

    match file_type(path) {
        FileType::Image => {
            println!("{} {}", dim("image"), url);
        }
        FileType::Text => {
            let client = ctx.client()?;
            match client.fetch_text(&url).await {
                Ok(content) => {
                    println!("{}", dim("text"));
                    println!();
                    print!("{}", content);
                    if !content.ends_with('\n') {
                        println!();
                    }
                }
                Err(e) => {
                    warning("Error loading file");
                    return Err(e);
                }
            }
        }
        FileType::Unknown => {
            println!("Unknown file type");
        }
    }

    Ok(())
}
