//! Summary command - load every catalog and report counts.

use super::spinner;
use crate::assets::{file_type, FileType};
use crate::catalog::{Catalog, CatalogLoad};
use crate::context::AppContext;
use crate::error::Result;
use crate::tree::build_tree;
use crate::utils::{format_count, header, success, warning};
use colored::Colorize;
use std::collections::BTreeMap;

/// Catalog failures are reported inline; the command still succeeds.
pub async fn run_summary(ctx: &AppContext) -> Result<()> {
    let client = ctx.client()?;
    let pb = spinner(format!("Loading catalogs from {}...", client.source()));
    let loads = client.load_all().await;
    pb.finish_and_clear();

    header(&format!("Catalogs ({})", client.source()));
    for load in &loads {
        print_load(load);
    }

    if let Some(assets) = loads
        .iter()
        .find(|load| load.catalog == Catalog::Assets && load.is_ok())
    {
        let mut by_type: BTreeMap<&'static str, u64> = BTreeMap::new();
        for path in &assets.entries {
            *by_type.entry(file_type(path).as_str()).or_default() += 1;
        }

        let tree = build_tree(&assets.entries);
        header("Assets");
        println!("  Directories: {}", format_count(tree.dir_count()));
        for kind in [FileType::Image, FileType::Text, FileType::Unknown] {
            let count = by_type.get(kind.as_str()).copied().unwrap_or(0);
            println!("  {:<12} {}", format!("{}:", kind.as_str()), format_count(count));
        }
    }

    let failed = loads.iter().filter(|load| !load.is_ok()).count();
    println!();
    if failed == 0 {
        success("All catalogs loaded");
    } else {
        warning(&format!("{} of {} catalogs failed to load", failed, loads.len()));
    }
    Ok(())
}

fn print_load(load: &CatalogLoad) {
    match &load.error {
        None => println!(
            "  {:<8} {}",
            load.catalog.name(),
            format_count(load.entries.len() as u64)
        ),
        Some(error) => println!("  {:<8} {}", load.catalog.name(), error.red()),
    }
}
