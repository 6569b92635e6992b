//! Conversion between multi-line display text and ordered line lists.

/// Split display text into lines, trimming each and dropping blank ones.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join lines into display text.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}
