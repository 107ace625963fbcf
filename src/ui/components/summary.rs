//! Totals and status line renderers.

use crate::app::StatusKind;
use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Renders the catalog totals left-aligned with a one-column indent.
pub fn render_summary(row: usize, summary: &str, theme: &Theme, cols: usize) -> usize {
    let text = truncate(summary, cols.saturating_sub(2));

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.summary_fg));
    print!(" {text}");
    print!("{}", " ".repeat(cols.saturating_sub(char_len(&text) + 1)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the status message, or a blank line when there is none.
///
/// The row is always consumed so the layout below does not jump when a
/// message appears.
pub fn render_status(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Success => &theme.colors.success_fg,
                StatusKind::Error => &theme.colors.error_fg,
            };
            let text = truncate(&status.text, cols.saturating_sub(2));
            print!("{}", Theme::fg(color));
            print!(" {text}");
            print!("{}", " ".repeat(cols.saturating_sub(char_len(&text) + 1)));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
