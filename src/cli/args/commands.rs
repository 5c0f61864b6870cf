//! Individual command argument structures.

use clap::{Parser, Subcommand};
use crate::gallery::Gallery;

use super::enums::OutputFormat;

#[derive(Parser, Clone)]
pub struct FilesArgs {
    /// Directory to list, slash-delimited (default: root)
    #[arg(default_value = "")]
    pub path: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Parser, Clone)]
pub struct TreeArgs {
    /// Directory to start from (default: root)
    #[arg(default_value = "")]
    pub path: String,

    /// Maximum depth to display
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Show file counts next to directories
    #[arg(short, long)]
    pub count: bool,

    /// Hide summary line
    #[arg(long)]
    pub no_summary: bool,
}

#[derive(Parser, Clone)]
pub struct SearchArgs {
    /// Query words; prefix a word with ! to exclude it
    pub query: Vec<String>,

    /// Match every file type, not only images
    #[arg(long)]
    pub all_types: bool,

    /// Print example queries and exit
    #[arg(long)]
    pub examples: bool,

    /// Print full asset URLs instead of paths
    #[arg(long)]
    pub urls: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Parser, Clone)]
pub struct GalleryArgs {
    /// Gallery to show
    #[arg(value_enum)]
    pub kind: Gallery,

    /// Print full asset URLs instead of paths
    #[arg(long)]
    pub urls: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Parser, Clone)]
pub struct ImagesArgs {
    /// Folder whose images to list (default: list folders)
    pub folder: Option<String>,

    /// Print full asset URLs instead of paths
    #[arg(long)]
    pub urls: bool,
}

#[derive(Parser, Clone)]
pub struct StoriesArgs {
    /// Story file to print (default: list stories)
    pub file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Parser, Clone)]
pub struct MediaArgs {
    /// Print the playable URL of this entry instead of the list
    #[arg(long, value_name = "PATH")]
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Parser, Clone)]
pub struct SpinesArgs {
    /// Skeleton file to build a player config for (default: list skeletons)
    pub path: Option<String>,

    /// Leave out the default animation
    #[arg(long)]
    pub no_animation: bool,
}

#[derive(Parser, Clone)]
pub struct ShowArgs {
    /// Asset path, as listed by `files`
    pub path: String,
}

#[derive(Parser, Clone)]
pub struct OpenArgs {
    /// View route, e.g. `/member-cards` or `search`
    pub route: String,
}

#[derive(Parser, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Write a config file with the default settings
    Init,
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
}
