//! Application layer coordinating state, events, and actions.
//!
//! Sits between the Zellij shim (`main.rs`) and the domain/API layers and
//! follows a unidirectional data flow:
//!
//! ```text
//! Key / WebRequestResult → Event → handle_event → AppState mutation → Actions
//!                                        ↑                              ↓
//!                                        └──── ApiResponse ◄── web_request
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Add-configuration form contents and focus
//! - [`handler`]: Event processing and the request lifecycle
//! - [`modes`]: Input, form-field and request state machines
//! - [`state`]: The in-memory catalog store

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::FormState;
pub use handler::{handle_event, Event};
pub use modes::{FormField, InputMode, RequestState};
pub use state::{AppState, StatusKind, StatusMessage, Totals};
