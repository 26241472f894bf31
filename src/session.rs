//
//  webmate-sdk
//  session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Session
//!
//! A [`WebmateApiSession`] bundles everything the facades need to talk to
//! webmate: credentials, the target environment, and optionally the project
//! that project-scoped operations (creating test sessions, starting
//! executions) run in.
//!
//! Sessions are built once and shared read-only between facades via `Arc`.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use webmate_sdk::auth::WebmateAuthInfo;
//! use webmate_sdk::session::{WebmateApiSession, WebmateEnvironment};
//!
//! let session = WebmateApiSession::new(
//!     WebmateAuthInfo::new("jane@example.com", "token"),
//!     WebmateEnvironment::default(),
//! )
//! .with_project("4a0b3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60".parse()?);
//!
//! let session = Arc::new(session);
//! assert!(session.project_id().is_some());
//! # Ok::<(), webmate_sdk::api::ApiError>(())
//! ```

use url::Url;

use crate::api::common::{ProjectId, Result};
use crate::auth::WebmateAuthInfo;

/// Base URL of the public webmate installation.
pub const DEFAULT_BASE_URL: &str = "https://app.webmate.io/api/v1";

/// The webmate installation requests are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebmateEnvironment {
    base_url: String,
}

impl WebmateEnvironment {
    /// Creates an environment from a base URL such as
    /// `https://webmate.example.com/api/v1`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::api::ApiError::InvalidUrl`] if `base_url` is not an
    /// absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())?;
        Ok(Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a resolved resource path onto the base URL.
    ///
    /// The base path is kept, so `https://host/api/v1` plus `/testmgmt/tests/x`
    /// gives `https://host/api/v1/testmgmt/tests/x`.
    ///
    /// ```rust
    /// use webmate_sdk::session::WebmateEnvironment;
    ///
    /// let env = WebmateEnvironment::new("https://host/api/v1/")?;
    /// let url = env.endpoint("/device/devices/abc")?;
    /// assert_eq!(url.as_str(), "https://host/api/v1/device/devices/abc");
    /// # Ok::<(), webmate_sdk::api::ApiError>(())
    /// ```
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", self.base_url, path))?)
    }
}

impl Default for WebmateEnvironment {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Credentials, environment and current project shared by all facades.
#[derive(Debug, Clone)]
pub struct WebmateApiSession {
    auth_info: WebmateAuthInfo,
    environment: WebmateEnvironment,
    project_id: Option<ProjectId>,
}

impl WebmateApiSession {
    /// Creates a session without a current project.
    pub fn new(auth_info: WebmateAuthInfo, environment: WebmateEnvironment) -> Self {
        Self {
            auth_info,
            environment,
            project_id: None,
        }
    }

    /// Associates the session with a project.
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// The credentials used for every request.
    pub fn auth_info(&self) -> &WebmateAuthInfo {
        &self.auth_info
    }

    /// The target installation.
    pub fn environment(&self) -> &WebmateEnvironment {
        &self.environment
    }

    /// The current project, if any.
    pub fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }
}
