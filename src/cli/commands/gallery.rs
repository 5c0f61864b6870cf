//! Gallery and image folder commands.

use super::{load_catalog, print_json};
use crate::catalog::Catalog;
use crate::cli::args::{GalleryArgs, ImagesArgs, OutputFormat};
use crate::context::AppContext;
use crate::error::{AssetBrowserError, Result};
use crate::gallery::image_folders;
use crate::utils::{dim, header, hint, pluralize};

pub async fn run_gallery(args: GalleryArgs, ctx: &AppContext) -> Result<()> {
    let assets = load_catalog(ctx, Catalog::Assets).await?;
    let groups = args.kind.groups(&assets);

    match args.output {
        OutputFormat::Json => print_json(&groups)?,
        OutputFormat::Paths => {
            for path in groups.iter().flat_map(|group| &group.assets) {
                println!("{}", asset_line(ctx, path, args.urls));
            }
        }
        OutputFormat::Text => {
            if groups.iter().all(|group| group.assets.is_empty()) {
                hint(&format!("No images found for {}", args.kind.title()));
                return Ok(());
            }
            for group in &groups {
                header(&format!(
                    "{} ({})",
                    group.title,
                    pluralize(group.assets.len(), "image", "images")
                ));
                for path in &group.assets {
                    println!("  {}", asset_line(ctx, path, args.urls));
                }
            }
        }
    }

    Ok(())
}

pub async fn run_images(args: ImagesArgs, ctx: &AppContext) -> Result<()> {
    let assets = load_catalog(ctx, Catalog::Assets).await?;
    let folders = image_folders(&assets);

    match args.folder {
        Some(folder) => {
            let folder = folder.trim_matches('/');
            let images = folders
                .get(folder)
                .ok_or_else(|| AssetBrowserError::PathNotFound(folder.to_string()))?;
            header(&format!("{} ({})", folder, pluralize(images.len(), "image", "images")));
            for path in images {
                println!("  {}", asset_line(ctx, path, args.urls));
            }
        }
        None => {
            for (folder, images) in &folders {
                let name = if folder.is_empty() { "." } else { folder.as_str() };
                println!("{}  {}", name, dim(&pluralize(images.len(), "image", "images")));
            }
        }
    }

    Ok(())
}

fn asset_line(ctx: &AppContext, path: &str, urls: bool) -> String {
    if urls {
        ctx.config.source.asset_url(path)
    } else {
        path.to_string()
    }
}
