//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process: [`compute_viewmodel`] turns the state
//! into a [`UIViewModel`](crate::ui::UIViewModel), then the components print
//! it. Only the second step touches stdout.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::compute_viewmodel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = compute_viewmodel(state, rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
