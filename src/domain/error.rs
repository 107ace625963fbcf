//! Error types for the rigbook plugin.
//!
//! Two families of failures reach the user: [`ValidationError`] for form input
//! that never leaves the plugin, and [`ApiError`] for anything that went wrong
//! around a request to the catalog backend. Both are folded into
//! [`RigbookError`] together with the plugin's own configuration and theme
//! failures. The `Display` text of the first two is what ends up in the status
//! line, so it is written for the user rather than for logs.

use thiserror::Error;

/// Form input rejected before any request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name, CPU or purpose is blank after trimming.
    #[error("Name, CPU and purpose are required.")]
    MissingRequiredField,

    /// RAM or storage is not a positive whole number.
    #[error("RAM and storage must be positive integers.")]
    InvalidQuantity,
}

/// Failure while talking to the catalog backend.
///
/// No variant is retried; the handler turns each one into a status message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The host could not complete the request, or answered with something
    /// that is not a backend payload at all.
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered 2xx but the body does not have the expected shape.
    #[error("Could not load configurations from the server.")]
    InvalidResponseShape,

    /// The backend answered with a non-2xx status.
    ///
    /// Holds the backend's own `message` when it sent one, otherwise a generic
    /// text for the operation.
    #[error("{0}")]
    ServerRejected(String),

    /// A request body could not be serialized.
    #[error("Could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The main error type for rigbook operations.
#[derive(Debug, Error)]
pub enum RigbookError {
    /// Submitted form values are malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A catalog request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Plugin configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for rigbook operations.
pub type Result<T> = std::result::Result<T, RigbookError>;
