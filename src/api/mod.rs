//! Catalog REST API client.
//!
//! Split in two halves so that the plugin logic stays free of I/O:
//!
//! - [`client`]: builds [`ApiRequest`]s for list, create and remove
//! - [`decode`]: turns a raw status + body back into records or an [`ApiError`]
//!
//! The Zellij shim sends each request with `web_request` and feeds the
//! `WebRequestResult` back through [`ApiResponse`].
//!
//! [`ApiError`]: crate::domain::ApiError

pub mod client;
pub mod decode;

pub use client::{ApiClient, ApiOperation, ApiRequest, Method, DEFAULT_API_URL};
pub use decode::{decode_create, decode_list, decode_remove, is_success};

/// Raw answer to an [`ApiRequest`], as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub operation: ApiOperation,
    pub status: u16,
    pub body: Vec<u8>,
}
