//! Formatting utilities for human-readable output.

use thousands::Separable;

/// Format a count with thousands separators (e.g., "1,234").
pub fn format_count(count: u64) -> String {
    count.separate_with_commas()
}

/// Pluralize a noun for a count (e.g., "1 image", "3 images").
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", format_count(count as u64), plural)
    }
}
