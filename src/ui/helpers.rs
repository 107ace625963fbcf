//! Shared rendering utilities and helpers.
//!
//! Text handling here works on character indices, never byte offsets, so
//! names with multi-byte characters can be truncated and highlighted safely.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending with `…` when cut.
///
/// # Example
///
/// ```rust
/// use rigbook::ui::helpers::truncate;
///
/// assert_eq!(truncate("Workstation", 6), "Works…");
/// assert_eq!(truncate("Box", 6), "Box");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Case-insensitive, non-overlapping occurrences of `query` in `text`.
///
/// `query` is expected to be lowercased already. Returns character ranges
/// `(start, end)` with `end` exclusive.
#[must_use]
pub fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let hay: Vec<char> = text.chars().collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start + needle.len() <= hay.len() {
        let matched = hay[start..start + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(h, n)| h.to_lowercase().eq(n.to_lowercase()));
        if matched {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }

    ranges
}

/// Prints `text` with the given character ranges highlighted.
///
/// `base` is the escape sequence for the surrounding style; it is re-applied
/// after every highlighted section so selection colors survive.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}{base}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Größe", 4), "Grö…");
        assert_eq!(truncate("Größe", 5), "Größe");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn substring_ranges_are_case_insensitive_and_disjoint() {
        assert_eq!(substring_ranges("Ryzen ryzen", "ryzen"), vec![(0, 5), (6, 11)]);
        assert_eq!(substring_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(substring_ranges("Intel", "amd").is_empty());
        assert!(substring_ranges("Intel", "").is_empty());
    }

    #[test]
    fn substring_ranges_use_character_offsets() {
        assert_eq!(substring_ranges("Büro PC", "pc"), vec![(5, 7)]);
    }
}
