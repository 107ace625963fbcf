//! Composable UI component renderers.
//!
//! Each component prints one part of the screen starting at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with counts and busy indicator
//! - [`summary`]: Catalog totals and the status line
//! - [`search`]: Filter input box
//! - [`list`]: Record cards (name, specs, purpose, note)
//! - [`form`]: Add-configuration form
//! - [`empty`]: Placeholder message
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Summary]
//! [Status]
//! [Search Bar - 3 lines, optional]
//! [List | Placeholder | Form]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod form;
mod header;
mod list;
mod search;
mod summary;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use list::render_items;
use search::render_search_bar;
use summary::{render_status, render_summary};

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen for a computed view model.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_summary(current_row, &vm.summary, theme, cols);
    current_row = render_status(current_row, vm.status.as_ref(), theme, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let _current_row = match &vm.body {
        Body::List(items) => render_items(current_row, items, theme, cols),
        Body::Placeholder(empty) => render_empty_state(current_row + 2, empty, theme, cols),
        Body::Form(fields) => render_form(current_row + 1, fields, theme, cols),
    };

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
