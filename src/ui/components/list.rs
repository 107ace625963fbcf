//! Record list renderer.
//!
//! Each record is a small card:
//!
//! ```text
//! ▌ Name                                   2h ago
//! ▌ CPU: … • RAM: 16GB • Storage: 512GB
//! ▌ Purpose: Gaming
//! ▌ note text (or "No note.")
//! ```
//!
//! The selected card is drawn with selection colors across its full width.

use crate::ui::helpers::{self, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ITEM_HEIGHT};

/// Renders every item and returns the row after the last card.
pub fn render_items(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        render_item(current_row, item, theme, cols);
        current_row += ITEM_HEIGHT;
    }
    current_row
}

/// Style prefix for a card line.
fn base_style(item: &DisplayItem, theme: &Theme) -> String {
    if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}

fn render_item(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) {
    let base = base_style(item, theme);
    let marker = if item.is_selected { "▌ " } else { "  " };

    // Name line, with the age right-aligned.
    position_cursor(row, 1);
    print!("{base}{}{marker}", Theme::bold());
    helpers::render_highlighted_text(
        &item.name,
        &item.highlight_ranges,
        theme,
        &format!("{base}{}", Theme::bold()),
    );
    let age = item.age.as_deref().unwrap_or("");
    let used = 2 + char_len(&item.name);
    let gap = cols.saturating_sub(used + char_len(age) + 1);
    print!("{}", " ".repeat(gap));
    if !age.is_empty() && gap > 0 {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{age} ");
    }
    print!("{}", Theme::reset());

    render_line(row + 1, &item.spec, &base, marker, cols);
    render_line(row + 2, &item.purpose, &base, marker, cols);

    let note_style = if item.is_selected || item.has_note {
        base.clone()
    } else {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    };
    render_line(row + 3, &item.note, &note_style, marker, cols);
}

fn render_line(row: usize, text: &str, style: &str, marker: &str, cols: usize) {
    position_cursor(row, 1);
    print!("{style}{marker}{text}");
    print!("{}", " ".repeat(cols.saturating_sub(2 + char_len(text))));
    print!("{}", Theme::reset());
}
