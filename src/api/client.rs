//! Request construction for the catalog REST API.
//!
//! The plugin never performs I/O itself: each operation is turned into an
//! [`ApiRequest`] that the Zellij shim hands to the host's `web_request`. The
//! request's context map carries an [`ApiOperation`] so the matching
//! `WebRequestResult` can be routed back to the right decoder.

use crate::domain::error::ApiError;
use crate::domain::NewPcRecord;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// Characters `encodeURIComponent` leaves untouched, removed from the escape set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Default collection URL, matching the reference backend's port and path.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:4173/api/pcs";

/// Context key naming the operation.
const CONTEXT_OP: &str = "op";

/// Context key holding the record id for create and remove.
const CONTEXT_ID: &str = "id";

/// HTTP method of a catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Which catalog call a request or response belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOperation {
    /// Load the whole collection.
    List,
    /// Store a new record with this id.
    Create { id: String },
    /// Delete the record with this id.
    Remove { id: String },
}

impl ApiOperation {
    /// Encodes the operation into a web request context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        let (op, id) = match self {
            Self::List => ("list", None),
            Self::Create { id } => ("create", Some(id)),
            Self::Remove { id } => ("remove", Some(id)),
        };
        context.insert(CONTEXT_OP.to_string(), op.to_string());
        if let Some(id) = id {
            context.insert(CONTEXT_ID.to_string(), id.clone());
        }
        context
    }

    /// Recovers the operation from a web request context map.
    ///
    /// Returns `None` for contexts this plugin did not produce.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let id = || context.get(CONTEXT_ID).cloned();
        match context.get(CONTEXT_OP)?.as_str() {
            "list" => Some(Self::List),
            "create" => Some(Self::Create { id: id()? }),
            "remove" => Some(Self::Remove { id: id()? }),
            _ => None,
        }
    }

    /// Short label used in spans and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create { .. } => "create",
            Self::Remove { .. } => "remove",
        }
    }
}

/// A fully described HTTP request, ready for the host to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub operation: ApiOperation,
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl ApiRequest {
    /// Context map to attach to the host request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        self.operation.to_context()
    }
}

/// Builds requests against one collection URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiClient {
    /// Creates a client for `base_url`, ignoring trailing slashes.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The collection URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {collection}`.
    #[must_use]
    pub fn list_all(&self) -> ApiRequest {
        ApiRequest {
            operation: ApiOperation::List,
            method: Method::Get,
            url: self.base_url.clone(),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// `POST {collection}` with the record as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn create(&self, record: &NewPcRecord) -> Result<ApiRequest, ApiError> {
        let body = serde_json::to_vec(record)?;
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Ok(ApiRequest {
            operation: ApiOperation::Create { id: record.id.clone() },
            method: Method::Post,
            url: self.base_url.clone(),
            headers,
            body,
        })
    }

    /// `DELETE {collection}/{id}` with the id escaped as a path segment.
    #[must_use]
    pub fn remove(&self, id: &str) -> ApiRequest {
        let escaped = utf8_percent_encode(id, PATH_SEGMENT);
        ApiRequest {
            operation: ApiOperation::Remove { id: id.to_string() },
            method: Method::Delete,
            url: format!("{}/{escaped}", self.base_url),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> NewPcRecord {
        NewPcRecord {
            id: "abc".to_string(),
            name: "Desk".to_string(),
            cpu: "i7".to_string(),
            ram: 16,
            storage: 1000,
            purpose: "Dev".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = ApiClient::new("http://host/api/pcs/");
        assert_eq!(client.list_all().url, "http://host/api/pcs");
    }

    #[test]
    fn create_posts_json_body() {
        let request = ApiClient::new("http://host/api/pcs").create(&body()).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        let sent: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(sent["note"], "");
        assert_eq!(sent["ram"], 16);
        assert_eq!(request.operation, ApiOperation::Create { id: "abc".to_string() });
    }

    #[test]
    fn remove_escapes_id_like_encode_uri_component() {
        let request = ApiClient::new("http://host/api/pcs").remove("a b/c?d-e_f.(g)");
        assert_eq!(request.url, "http://host/api/pcs/a%20b%2Fc%3Fd-e_f.(g)");
        assert_eq!(request.method, Method::Delete);
        assert!(request.body.is_empty());
    }

    #[test]
    fn context_round_trips_every_operation() {
        for op in [
            ApiOperation::List,
            ApiOperation::Create { id: "x".to_string() },
            ApiOperation::Remove { id: "y".to_string() },
        ] {
            assert_eq!(ApiOperation::from_context(&op.to_context()), Some(op));
        }
    }

    #[test]
    fn foreign_context_is_rejected() {
        let mut context = BTreeMap::new();
        assert_eq!(ApiOperation::from_context(&context), None);
        context.insert("op".to_string(), "remove".to_string());
        assert_eq!(ApiOperation::from_context(&context), None);
    }
}
