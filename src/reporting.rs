use crate::utils::{format_bytes, format_number};
use tracing::info;

/// Prints statistics for the concatenated content.
pub fn print_stats(content: &str) {
    let chars = content.chars().count();
    let lines = content.lines().count();
    let words = content.split_whitespace().count();

    info!("Clipboard content stats:");
    info!("  Characters: {}", format_number(chars));
    info!("  Lines: {}", format_number(lines));
    info!("  Words: {}", format_number(words));
    info!("  Size: {}", format_bytes(content.len() as u64));
}
