//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and the pure projection from state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Text truncation, match ranges and highlighting
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    compute_viewmodel, compute_viewmodel_at, Body, DisplayItem, EmptyState, FooterInfo,
    FormFieldView, HeaderInfo, SearchBarInfo, StatusLine, UIViewModel,
};
