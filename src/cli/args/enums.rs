//! ValueEnum types for CLI arguments.

use clap::ValueEnum;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,
    /// JSON output
    Json,
    /// One path per line (for piping)
    Paths,
}
