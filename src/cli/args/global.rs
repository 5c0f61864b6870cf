//! Global CLI structures.

use clap::builder::styling::{AnsiColor, Effects};
use clap::builder::Styles;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;

use super::commands::{
    ConfigArgs, FilesArgs, GalleryArgs, ImagesArgs, MediaArgs, OpenArgs, SearchArgs, ShowArgs,
    SpinesArgs, StoriesArgs, TreeArgs,
};

// Configures colored help menu colors (similar to uv)
pub const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Global CLI structure
#[derive(Parser)]
#[command(name = "konofan-assets")]
#[command(about = "Browse the extracted Konofan asset corpus")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory or base URL holding assets.txt and the other lists
    #[arg(long, global = true, env = "KONOFAN_ASSETS_SOURCE")]
    pub source: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the contents of a directory in the asset tree
    Files(FilesArgs),

    /// Draw the asset tree below a directory
    Tree(TreeArgs),

    /// Search image paths ("unit !thmb" excludes thumbnails)
    Search(SearchArgs),

    /// Show a curated image gallery
    Gallery(GalleryArgs),

    /// List image folders, or the images in one folder
    Images(ImagesArgs),

    /// List story scripts, or print one story
    Stories(StoriesArgs),

    /// List videos
    Videos(MediaArgs),

    /// List music tracks
    Music(MediaArgs),

    /// List sound effects by category
    Sounds(MediaArgs),

    /// List spine skeletons, or print the player config for one
    Spines(SpinesArgs),

    /// Preview a single asset
    Show(ShowArgs),

    /// List the browser views and their routes
    Views,

    /// Open a view by route (e.g. /member-cards)
    Open(OpenArgs),

    /// Load every list and print entry counts
    Summary,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Parse CLI with colored styles
pub fn parse_cli() -> Cli {
    let cmd = Cli::command().styles(STYLES).color(clap::ColorChoice::Auto);
    let matches = cmd.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}
