//
//  webmate-sdk
//  api/common/ids.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Identifier types for webmate resources.
//!
//! Every webmate resource is addressed by a UUID. Each resource family gets
//! its own newtype so a [`TestRunId`] cannot be passed where a [`TestId`] is
//! expected.
//!
//! Identifiers are created by the caller from a known UUID string, or
//! assigned by the server and deserialized from a response. On the wire they
//! are the plain hyphenated UUID string.
//!
//! # Example
//!
//! ```rust
//! use std::str::FromStr;
//! use webmate_sdk::api::common::ProjectId;
//!
//! let id = ProjectId::from_str("8f0f3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60")?;
//! assert_eq!(id.to_string(), "8f0f3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60");
//! # Ok::<(), webmate_sdk::api::ApiError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiError;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing UUID.
            pub const fn new(value: Uuid) -> Self {
                Self(value)
            }

            /// Creates an identifier from a fresh random UUID.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the wrapped UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = ApiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|source| ApiError::InvalidId {
                        kind: stringify!($name),
                        value: s.to_string(),
                        source,
                    })
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ApiError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_id!(
    /// Identifier of a webmate project (as shown in the dashboard).
    ProjectId
);

uuid_id!(
    /// Identifier of a Test.
    TestId
);

uuid_id!(
    /// Identifier of a single run of a Test.
    TestRunId
);

uuid_id!(
    /// Identifier of a TestExecution, the container a TestRun is started from.
    TestExecutionId
);

uuid_id!(
    /// Identifier of a TestSession grouping related executions.
    TestSessionId
);

uuid_id!(
    /// Identifier of an Artifact.
    ArtifactId
);

uuid_id!(
    /// Identifier of a device. Found in the "Details" dialog of the webmate
    /// device overview.
    DeviceId
);

uuid_id!(
    /// Identifier of a device image.
    ImageId
);

uuid_id!(
    /// Identifier of an app package.
    PackageId
);

uuid_id!(
    /// Identifier of a browser session.
    BrowserSessionId
);

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "4a0b3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60";

    #[test]
    fn test_string_round_trip() {
        let id = TestRunId::from_str(SAMPLE).unwrap();
        assert_eq!(id.to_string(), SAMPLE);

        for _ in 0..16 {
            let original = Uuid::new_v4().hyphenated().to_string();
            let id: DeviceId = original.parse().unwrap();
            assert_eq!(id.to_string(), original);
        }
    }

    #[test]
    fn test_value_equality() {
        let a = ProjectId::from_str(SAMPLE).unwrap();
        let b = ProjectId::try_from(SAMPLE).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, ProjectId::random());
    }

    #[test]
    fn test_invalid_uuid_is_rejected() {
        let err = ArtifactId::from_str("not-a-uuid").unwrap_err();
        match err {
            ApiError::InvalidId { kind, value, .. } => {
                assert_eq!(kind, "ArtifactId");
                assert_eq!(value, "not-a-uuid");
            }
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = TestSessionId::from_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));

        let back: TestSessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_uuid_conversions() {
        let uuid = Uuid::parse_str(SAMPLE).unwrap();
        let id = ImageId::from(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(Uuid::from(id), uuid);
        assert_eq!(PackageId::new(uuid).to_string(), SAMPLE);
    }
}
