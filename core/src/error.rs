//! Error types for the items API client.
//!
//! # Design
//! Three failure classes never mix: a request that could not be exchanged
//! (`TransportError`), a response with a non-success status or an unreadable
//! body (`ApiError`), and input rejected before any request was built
//! (`ValidationError`). `ClientError` joins the first two for a full
//! round-trip.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by `ItemsClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// The human-readable message the server put in its error body, if any.
    ///
    /// Reads `{"error": "..."}` first and falls back to a string `detail`
    /// field, which is what FastAPI-style services send.
    pub fn server_message(&self) -> Option<String> {
        let ApiError::HttpError { body, .. } = self else {
            return None;
        };
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .error
            .or_else(|| match parsed.detail {
                Some(serde_json::Value::String(detail)) => Some(detail),
                _ => None,
            })
            .filter(|m| !m.trim().is_empty())
    }
}

/// The request never produced a response.
#[derive(Debug, Error)]
#[error("{method} {url} failed: {reason}")]
pub struct TransportError {
    pub method: &'static str,
    pub url: String,
    pub reason: String,
}

/// Client-side precondition failures. Nothing is sent when one occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("item name must not be empty")]
    EmptyName,
}

/// Outcome of a failed build-execute-parse round-trip.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
