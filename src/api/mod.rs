//
//  webmate-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the request/response plumbing and the resource
//! clients for the webmate REST API.
//!
//! ## Architecture
//!
//! - [`template`]: `${name}` path templates
//! - [`client`]: Authenticated HTTP transport and the present/absent response
//! - [`codec`]: The one JSON codec used for all bodies
//! - [`common`]: Error type, identifiers, response envelopes
//! - [`testmgmt`], [`artifacts`], [`devices`]: One resource client per
//!   resource family, each with its table of URI templates
//!
//! Resource clients hold an `Arc<dyn ApiTransport>` and never build HTTP
//! requests themselves. Most callers want the facades in [`crate::facade`]
//! instead of using this layer directly.
//!
//! ## Error Handling
//!
//! All operations return [`Result`], whose error is [`ApiError`]. Endpoints
//! that may legitimately have no data return `Ok(None)`.

/// Authenticated HTTP transport.
///
/// Provides [`WebmateApiClient`], the [`ApiTransport`] trait and the
/// [`ApiResponse`] present/absent wrapper.
pub mod client;

/// JSON encode/decode shared by all resource clients.
pub mod codec;

/// Types shared across resource families.
///
/// Includes:
/// - [`ApiError`]: Unified error type
/// - [`ApiResult`]: `value` envelope
/// - Identifier newtypes ([`common::ProjectId`], [`common::TestRunId`], ...)
pub mod common;

/// Path templates with `${name}` placeholders.
pub mod template;

/// Tests, test runs, executions and sessions.
pub mod testmgmt;

/// Artifacts recorded during test runs.
pub mod artifacts;

/// Devices deployed in a project.
pub mod devices;

pub use client::{ApiResponse, ApiTransport, HttpResponse, WebmateApiClient};
pub use common::{ApiError, ApiResult, Result};
pub use template::UriTemplate;
