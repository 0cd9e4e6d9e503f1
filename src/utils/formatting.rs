//! Text formatting utilities for the status bar.
//!
//! This module provides helper functions for formatting values in a human-readable way.

/// Formats a pixel width with thousands separators.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_width(1280), "1,280 px");
/// assert_eq!(format_width(500), "500 px");
/// ```
pub fn format_width(width_px: u32) -> String {
    let s = width_px.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result.push_str(" px");
    result
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}
