//
//  webmate-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the webmate resource clients
//!
//! This module provides the types shared by every resource family: the
//! unified error type, the `value` envelope some endpoints wrap their
//! payload in, and the identifier types (re-exported from [`ids`]).
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all client operations
//! - [`ApiResult`] - Envelope exposing a `value` field
//! - Identifiers such as [`ProjectId`] and [`TestRunId`]
//!
//! # Example
//!
//! ```rust
//! use webmate_sdk::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<Option<T>, ApiError>) {
//!     match result {
//!         Ok(Some(_)) => println!("Found"),
//!         Ok(None) => println!("No such resource"),
//!         Err(ApiError::Transport(e)) => println!("Could not reach webmate: {}", e),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - "Not found" is never an error. Endpoints that may legitimately have no
//!   data return `Ok(None)`.
//! - Transport and deserialization failures are separate variants so callers
//!   can tell "never reached the server" from "reached it, got garbage".

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod ids;

pub use ids::*;

/// Result alias used throughout the client layer.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for all webmate client operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Template` | A path placeholder was not supplied |
/// | `Transport` | Connection failure, the server was not reached |
/// | `Status` | The server answered with an error status |
/// | `Deserialization` | The response body did not have the expected shape |
/// | `Serialization` | A request body could not be encoded |
/// | `NoResponse` | An endpoint that must return a body did not |
/// | `Precondition` | Session state required by the operation is missing |
/// | `InvalidUrl` | The environment base URL is malformed |
/// | `InvalidId` | An identifier string is not a UUID |
#[derive(Error, Debug)]
pub enum ApiError {
    /// A placeholder referenced by a URI template had no value.
    ///
    /// This is a programming error: the caller passed an incomplete
    /// parameter set.
    #[error("Unresolved placeholder '{placeholder}' in URI template '{template}'")]
    Template {
        /// The template being resolved
        template: String,
        /// The placeholder without a value
        placeholder: String,
    },

    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and other transport-layer issues.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status that is neither success nor one of
    /// the "no data" statuses.
    #[error("API error ({status}): {message}")]
    Status {
        /// The HTTP status code
        status: StatusCode,
        /// Message extracted from the error body
        message: String,
    },

    /// The response body could not be parsed into the expected type.
    #[error("Error reading {context} data: {source}")]
    Deserialization {
        /// What was being read (e.g. `Test`)
        context: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be encoded as JSON.
    #[error("Error encoding request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// An endpoint that always returns a body returned none.
    ///
    /// The payload names the failed operation, e.g. `create TestSession`.
    #[error("Could not {0}. Got no response")]
    NoResponse(String),

    /// A facade operation requires session state that is missing.
    #[error("{0}")]
    Precondition(String),

    /// The environment base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An identifier string is not a valid UUID.
    #[error("Invalid {kind} '{value}': {source}")]
    InvalidId {
        /// Identifier type name, e.g. `ProjectId`
        kind: &'static str,
        /// The rejected input
        value: String,
        /// The underlying parse error
        #[source]
        source: uuid::Error,
    },
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from an error response.
    ///
    /// webmate error bodies are usually JSON. The message is taken from the
    /// first of these that is present:
    ///
    /// - `{"message": "..."}`
    /// - `{"error": {"message": "..."}}`
    /// - `{"errors": [{"message": "..."}]}`
    ///
    /// Otherwise the raw body is used, or the status reason if the body is
    /// empty.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        Self::Status {
            status,
            message: extract_error_message(status, body),
        }
    }

    /// Returns `true` if the server was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }

        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

/// Envelope used by endpoints that wrap their payload in a `value` field.
///
/// # Example
///
/// ```rust
/// use webmate_sdk::api::common::ApiResult;
///
/// let json = r#"{"value": [1, 2, 3]}"#;
/// let result: ApiResult<Vec<u32>> = serde_json::from_str(json).unwrap();
/// assert_eq!(result.value, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult<T> {
    /// The wrapped payload.
    pub value: T,
}
