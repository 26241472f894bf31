//
//  webmate-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! webmate authenticates API calls with two headers carrying the account's
//! email address and an API token. The token is created in the webmate
//! dashboard under the account settings.
//!
//! ## Example
//!
//! ```rust,no_run
//! use webmate_sdk::auth::WebmateAuthInfo;
//! use reqwest::Client;
//!
//! async fn whoami(auth: &WebmateAuthInfo) -> reqwest::Result<reqwest::Response> {
//!     let request = Client::new().get("https://app.webmate.io/api/v1/projects");
//!     auth.apply_to_request(request).send().await
//! }
//! ```
//!
//! ## Notes
//!
//! - Headers are attached on every request; nothing is cached.
//! - Storing credentials is left to the caller. The `wm` binary reads them
//!   from its config file or the environment.

use std::fmt;

use reqwest::RequestBuilder;

/// Header carrying the account email address.
pub const USER_HEADER: &str = "webmate.user";

/// Header carrying the API token.
pub const API_TOKEN_HEADER: &str = "webmate.api-token";

/// Credentials for the webmate API.
///
/// # Example
///
/// ```rust
/// use webmate_sdk::auth::WebmateAuthInfo;
///
/// let auth = WebmateAuthInfo::new("jane@example.com", "secret-token");
/// assert_eq!(auth.email_address(), "jane@example.com");
///
/// // The token never shows up in debug output
/// assert!(!format!("{:?}", auth).contains("secret-token"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WebmateAuthInfo {
    email_address: String,
    api_token: String,
}

impl WebmateAuthInfo {
    /// Creates credentials from an email address and API token.
    pub fn new(email_address: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            api_token: api_token.into(),
        }
    }

    /// The account email address.
    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// The API token.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Adds the authentication headers to an HTTP request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(USER_HEADER, &self.email_address)
            .header(API_TOKEN_HEADER, &self.api_token)
    }
}

impl fmt::Debug for WebmateAuthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebmateAuthInfo")
            .field("email_address", &self.email_address)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
