// Library modules - re-exported for use in binary
use konofan_assets::assets;
use konofan_assets::catalog;
use konofan_assets::config;
use konofan_assets::error;
use konofan_assets::gallery;
use konofan_assets::media;
use konofan_assets::search;
use konofan_assets::tree;
use konofan_assets::utils;
use konofan_assets::view;

// Binary-specific modules
mod cli;
mod context;

use cli::{parse_cli, Commands};
use context::AppContext;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load context
    let ctx = AppContext::new(cli.config.clone())?.with_overrides(cli.source.clone());

    // Dispatch to command
    match cli.command {
        Commands::Files(args) => cli::commands::run_files(args, &ctx).await?,
        Commands::Tree(args) => cli::commands::run_tree(args, &ctx).await?,
        Commands::Search(args) => cli::commands::run_search(args, &ctx).await?,
        Commands::Gallery(args) => cli::commands::run_gallery(args, &ctx).await?,
        Commands::Images(args) => cli::commands::run_images(args, &ctx).await?,
        Commands::Stories(args) => cli::commands::run_stories(args, &ctx).await?,
        Commands::Videos(args) => cli::commands::run_videos(args, &ctx).await?,
        Commands::Music(args) => cli::commands::run_music(args, &ctx).await?,
        Commands::Sounds(args) => cli::commands::run_sounds(args, &ctx).await?,
        Commands::Spines(args) => cli::commands::run_spines(args, &ctx).await?,
        Commands::Show(args) => cli::commands::run_show(args, &ctx).await?,
        Commands::Views => cli::commands::run_views(),
        Commands::Open(args) => cli::commands::run_open(args, &ctx).await?,
        Commands::Summary => cli::commands::run_summary(&ctx).await?,
        Commands::Config(args) => cli::commands::run_config(args, &ctx)?,
    }

    Ok(())
}
