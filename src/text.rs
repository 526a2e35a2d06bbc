//! Helpful utilities for working with text.

use itertools::Itertools;

/// Descriptions and overviews longer than this many characters are truncated.
pub const SUMMARY_WIDTH: usize = 60;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Cuts `text` down to `width` characters, appending an [`ELLIPSIS`] if
/// anything was removed.
///
/// Widths are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use clifetch::text::truncate;
/// assert_eq!(truncate("A fairly long sentence", 8), "A fairly...");
/// ```
///
/// ```
/// use clifetch::text::truncate;
/// assert_eq!(truncate("Short", 8), "Short");
/// ```
///
/// ```
/// use clifetch::text::truncate;
/// assert_eq!(truncate("Exactly8", 8), "Exactly8");
/// ```
pub fn truncate(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((idx, _)) => format!("{}{ELLIPSIS}", &text[..idx]),
        None => text.to_string(),
    }
}

/// Formats `n` with a comma between each group of three digits.
///
/// # Examples
///
/// ```
/// use clifetch::text::thousands;
/// assert_eq!(thousands(1234567), "1,234,567");
/// ```
///
/// ```
/// use clifetch::text::thousands;
/// assert_eq!(thousands(999), "999");
/// ```
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let grouped = digits
        .chars()
        .rev()
        .chunks(3)
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .join(",");
    grouped.chars().rev().collect()
}
