//
//  webmate-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # webmate SDK
//!
//! A client library for the webmate test automation platform, plus the `wm`
//! command-line tool built on top of it.
//!
//! ## Overview
//!
//! The SDK talks to the webmate REST API over HTTPS. A [`WebmateApiSession`]
//! carries the credentials, the target environment and an optional current
//! project; the facades in [`facade`] share one session and expose the
//! platform's resource families.
//!
//! ## Module Structure
//!
//! - [`api`]: URI templates, the authenticated HTTP client and resource clients
//! - [`auth`]: Credentials and request authentication
//! - [`session`]: API session and environment
//! - [`facade`]: Public entry points per resource family
//! - [`config`]: Configuration file management for `wm`
//! - [`output`]: Output formatting (Table, JSON)
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use webmate_sdk::{DeviceClient, WebmateApiSession, WebmateAuthInfo, WebmateEnvironment};
//!
//! # async fn example() -> webmate_sdk::api::Result<()> {
//! let session = Arc::new(WebmateApiSession::new(
//!     WebmateAuthInfo::new("jane@example.com", "my-api-token"),
//!     WebmateEnvironment::default(),
//! ));
//!
//! let devices = DeviceClient::new(session)?;
//! let project = "4a0b3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60".parse()?;
//! for id in devices.get_device_ids_for_project(project).await? {
//!     println!("{id}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Absent results
//!
//! | Situation | Result |
//! |-----------|--------|
//! | 2xx with body | `Ok(Some(value))` |
//! | 204 or empty body | `Ok(None)` |
//! | 404 | `Ok(None)` |
//! | other non-2xx | `Err(ApiError::Status { .. })` |

/// Command-line interface definitions.
///
/// Contains the `wm` commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// URI templates, the authenticated base client and the resource clients.
pub mod api;

/// Credentials and request authentication.
pub mod auth;

/// API session and target environment.
pub mod session;

/// Public facades over the resource clients.
pub mod facade;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/wm/config.toml`
/// - macOS: `~/Library/Application Support/wm/config.toml`
/// - Windows: `%APPDATA%\wm\config.toml`
pub mod config;

/// Output formatting for tables and JSON.
pub mod output;

pub use auth::WebmateAuthInfo;
pub use config::Config;
pub use facade::{ArtifactClient, DeviceClient, TestMgmtClient, TestRun, TestSession};
pub use session::{WebmateApiSession, WebmateEnvironment};

/// Name of the CLI binary, used for display and configuration paths.
pub const APP_NAME: &str = "wm";

/// SDK version, sent in the `User-Agent` header.
///
/// ```rust
/// use webmate_sdk::VERSION;
///
/// println!("wm version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Missing or rejected credentials.
    ///
    /// Set `WEBMATE_USER` and `WEBMATE_API_TOKEN`, or run
    /// `wm config set user ...` and `wm config set api_token ...`.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested test, run, artifact or project does not exist.
    pub const NOT_FOUND: i32 = 8;
}
