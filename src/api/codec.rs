//
//  webmate-sdk
//  api/codec.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON codec shared by every resource client.
//!
//! All request bodies are encoded and all response bodies decoded through
//! these two functions, so identifiers serialize as plain UUID strings and
//! timestamps as RFC 3339 everywhere.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::common::{ApiError, Result};

/// Encodes a request payload into a JSON tree.
///
/// # Errors
///
/// Returns [`ApiError::Serialization`] if `value` cannot be represented as
/// JSON (e.g. a map with non-string keys).
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(ApiError::Serialization)
}

/// Decodes a response body.
///
/// `context` names what is being read and ends up in the error message.
///
/// # Errors
///
/// Returns [`ApiError::Deserialization`] if the body does not match `T`.
pub fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| ApiError::Deserialization {
        context: context.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::TestRunId;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_encode_ids_and_timestamps() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Payload {
            test_run_id: TestRunId,
            created_at: chrono::DateTime<Utc>,
        }

        let id: TestRunId = "4a0b3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60".parse().unwrap();
        let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let value = encode(&Payload {
            test_run_id: id,
            created_at,
        })
        .unwrap();

        assert_eq!(value["testRunId"], "4a0b3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60");
        assert_eq!(value["createdAt"], "2025-03-01T12:00:00Z");
    }

    #[test]
    fn test_decode_error_carries_context() {
        let err = decode::<Vec<TestRunId>>("{\"oops\": true}", "TestRunId").unwrap_err();
        assert!(matches!(
            err,
            ApiError::Deserialization { ref context, .. } if context == "TestRunId"
        ));
        assert!(err.to_string().starts_with("Error reading TestRunId data"));
    }
}
