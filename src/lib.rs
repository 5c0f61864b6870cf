//! konofan-assets: browse the extracted Konofan asset corpus from the command line.
//!
//! The core is pure: [`tree::build_tree`] turns the flat asset list into a
//! directory tree, [`tree::list_children`] lists one directory, and
//! [`search::search`] runs include/exclude token queries over the list.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod media;
pub mod search;
pub mod tree;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use assets::{file_type, is_image, FileType};
pub use error::{AssetBrowserError, Result};
pub use search::{search, SearchOutcome};
pub use tree::{build_tree, list_children, Node, NodeKind};
