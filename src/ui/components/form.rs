//! Add-configuration form renderer.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormFieldView;

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 13;

/// Renders one row per field, `label  value`, with a cursor on the focused one.
pub fn render_form(row: usize, fields: &[FormFieldView], theme: &Theme, cols: usize) -> usize {
    let value_width = cols.saturating_sub(LABEL_WIDTH + 6);
    let mut current_row = row;

    for field in fields {
        position_cursor(current_row, 1);

        let (marker, label_color) = if field.is_focused {
            ("›", &theme.colors.form_focus_fg)
        } else {
            (" ", &theme.colors.text_dim)
        };

        print!("{}", Theme::fg(label_color));
        if field.is_focused {
            print!("{}", Theme::bold());
        }
        print!(" {marker} {:<width$}", field.label, width = LABEL_WIDTH);
        print!("{}", Theme::reset());

        let cursor = if field.is_focused { "▏" } else { "" };
        let value = truncate(&format!("{}{cursor}", field.value), value_width);
        print!("{}{value}", Theme::fg(&theme.colors.text_normal));
        let mut used = 3 + LABEL_WIDTH + char_len(&value);

        if let Some(hint) = field.hint {
            if field.value.is_empty() && used + char_len(hint) + 3 <= cols {
                print!("{}{} ({hint})", Theme::dim(), Theme::fg(&theme.colors.text_dim));
                used += char_len(hint) + 3;
            }
        }

        print!("{}", " ".repeat(cols.saturating_sub(used)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
