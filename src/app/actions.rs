//! Side effects requested by the event handler.
//!
//! The handler never calls into Zellij. It returns a list of [`Action`]s and
//! the plugin shim executes them in order, which keeps every state transition
//! testable without a host.

use crate::api::ApiRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane (e.g., pressing 'q').
    CloseFocus,

    /// Sends a catalog request through the host.
    ///
    /// The answer comes back later as an `ApiResponse` event carrying the
    /// same operation.
    SendRequest(ApiRequest),
}
