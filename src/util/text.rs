// src/util/text.rs

/// Extract a short preview from note content.
///
/// Takes the first non-empty line, trimmed, truncated to `max_chars`
/// characters. An ellipsis marks anything cut off, whether by truncation
/// or by further lines.
///
/// # Examples
///
/// ```
/// use notehub::util::text::preview;
///
/// assert_eq!(preview("Buy milk", 100), "Buy milk");
/// assert_eq!(preview("Buy milk\nand bread", 100), "Buy milk...");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
pub fn preview(content: &str, max_chars: usize) -> String {
    let first_line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    let mut out: String = first_line.chars().take(max_chars).collect();

    let truncated = first_line.chars().count() > max_chars;
    let has_more_lines = content.trim().lines().count() > 1;
    if !out.is_empty() && (truncated || has_more_lines) {
        out.push_str("...");
    }
    out
}
