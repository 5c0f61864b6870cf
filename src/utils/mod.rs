//! Utility modules for terminal output.

pub mod colors;
pub mod format;

pub use colors::*;
pub use format::*;
