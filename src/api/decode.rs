//! Response decoding for the catalog REST API.
//!
//! Each decoder takes the raw status and body of a `WebRequestResult` and
//! classifies it. A non-2xx answer from the backend always carries a JSON
//! `{"message": ...}` object; anything else with a failing status is treated
//! as a transport problem reported by the host.

use crate::domain::error::ApiError;
use crate::domain::PcRecord;
use serde::Deserialize;

/// Fallback text when a create is rejected without a message.
pub const CREATE_FAILED: &str = "Could not save the configuration.";

/// Fallback text when a delete is rejected without a message.
pub const REMOVE_FAILED: &str = "Could not delete the configuration.";

/// Fallback text when a list load is rejected without a message.
pub const LIST_FAILED: &str = "Could not load configurations from the server.";

/// Longest raw failure body kept verbatim in a transport error.
const MAX_REASON_CHARS: usize = 120;

/// Error body sent by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Returns `true` for 2xx statuses.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Classifies a failing response.
///
/// A JSON object body means the backend answered: its `message` (or
/// `fallback` when missing or blank) becomes [`ApiError::ServerRejected`].
/// Any other body means the request never reached a backend that speaks this
/// protocol. Its text is kept as [`ApiError::Transport`] when it is a short
/// single line, otherwise only the status is reported.
fn rejection(status: u16, body: &[u8], fallback: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        let message = parsed
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return ApiError::ServerRejected(message);
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    if is_plain_reason(&text) {
        ApiError::Transport(text)
    } else {
        ApiError::Transport(format!("request failed with status {status}"))
    }
}

/// Whether a raw body is short enough to show on the status line. Error pages
/// and multi-line dumps are not.
fn is_plain_reason(text: &str) -> bool {
    !text.is_empty()
        && !text.starts_with('<')
        && !text.contains('\n')
        && text.chars().count() <= MAX_REASON_CHARS
}

/// Decodes the answer to a list request.
///
/// # Errors
///
/// - [`ApiError::ServerRejected`] / [`ApiError::Transport`] for failing statuses
/// - [`ApiError::InvalidResponseShape`] if a 2xx body is not an array of records
pub fn decode_list(status: u16, body: &[u8]) -> Result<Vec<PcRecord>, ApiError> {
    if !is_success(status) {
        return Err(rejection(status, body, LIST_FAILED));
    }
    serde_json::from_slice::<Vec<PcRecord>>(body).map_err(|e| {
        tracing::debug!(error = %e, "list body is not an array of records");
        ApiError::InvalidResponseShape
    })
}

/// Decodes the answer to a create request into the stored record.
///
/// # Errors
///
/// - [`ApiError::ServerRejected`] / [`ApiError::Transport`] for failing statuses
/// - [`ApiError::InvalidResponseShape`] if a 2xx body is not a record
pub fn decode_create(status: u16, body: &[u8]) -> Result<PcRecord, ApiError> {
    if !is_success(status) {
        return Err(rejection(status, body, CREATE_FAILED));
    }
    serde_json::from_slice::<PcRecord>(body).map_err(|e| {
        tracing::debug!(error = %e, "create body is not a record");
        ApiError::InvalidResponseShape
    })
}

/// Decodes the answer to a delete request. A 2xx body is ignored.
///
/// # Errors
///
/// [`ApiError::ServerRejected`] / [`ApiError::Transport`] for failing statuses.
pub fn decode_remove(status: u16, body: &[u8]) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(rejection(status, body, REMOVE_FAILED))
    }
}
