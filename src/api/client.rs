//
//  webmate-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the webmate API
//!
//! This module provides the authenticated request layer every resource
//! client is built on.
//!
//! ## Features
//!
//! - URI template resolution against the session's environment
//! - Authentication header injection on every call
//! - Ordered query parameters and JSON request bodies
//! - Uniform present/absent response convention
//! - Custom `User-Agent` header
//!
//! ## Response Convention
//!
//! | Server answer | Result |
//! |---------------|--------|
//! | 2xx with a body | `Ok(ApiResponse::Present(..))` |
//! | `404 Not Found` | `Ok(ApiResponse::Absent)` |
//! | `204 No Content` | `Ok(ApiResponse::Present(..))` with an empty body |
//! | any other status | `Err(ApiError::Status { .. })` |
//! | connection failure | `Err(ApiError::Transport(..))` |
//!
//! Absence is an expected outcome, not an error. Several endpoints return
//! "no data" for legitimate states, such as a test run without results.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::codec;
use super::common::Result;
use super::template::UriTemplate;
use super::ApiError;
use crate::auth::WebmateAuthInfo;
use crate::session::{WebmateApiSession, WebmateEnvironment};

/// Name/value pairs, used for both path and query parameters.
pub type Params<'a> = [(&'a str, String)];

/// A raw HTTP response whose body has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: StatusCode,
    body: String,
}

impl HttpResponse {
    /// Creates a response from a status code and body text.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the body holds more than whitespace.
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// Decodes the body as JSON.
    ///
    /// `context` names what is being read, e.g. `"Test"`, and appears in
    /// the error message on failure.
    pub fn json<T: DeserializeOwned>(&self, context: &str) -> Result<T> {
        codec::decode(&self.body, context)
    }
}

/// Outcome of a request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// The server accepted the request. The body may be empty.
    Present(HttpResponse),
    /// The server reported no such resource.
    Absent,
}

impl ApiResponse {
    /// Converts into an `Option` of a response with a body.
    ///
    /// `None` for [`ApiResponse::Absent`] and for an empty body.
    pub fn into_option(self) -> Option<HttpResponse> {
        match self {
            Self::Present(response) if response.has_body() => Some(response),
            _ => None,
        }
    }

    /// Returns `true` if a response body is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns the response, or [`ApiError::NoResponse`] naming `operation`
    /// if it is absent or has an empty body.
    ///
    /// For endpoints whose contract always returns a body.
    ///
    /// ```rust
    /// use webmate_sdk::api::ApiResponse;
    ///
    /// let err = ApiResponse::Absent.require("start TestExecution").unwrap_err();
    /// assert_eq!(err.to_string(), "Could not start TestExecution. Got no response");
    /// ```
    pub fn require(self, operation: &str) -> Result<HttpResponse> {
        match self {
            Self::Present(response) if response.has_body() => Ok(response),
            _ => {
                tracing::warn!(operation, "webmate returned no response");
                Err(ApiError::NoResponse(operation.to_string()))
            }
        }
    }

    /// Fails with [`ApiError::NoResponse`] only if the resource was not
    /// found. An empty success answer is accepted.
    ///
    /// For actions that return nothing, such as finishing a TestRun.
    pub fn ensure_found(self, operation: &str) -> Result<()> {
        match self {
            Self::Present(_) => Ok(()),
            Self::Absent => {
                tracing::warn!(operation, "webmate reported no such resource");
                Err(ApiError::NoResponse(operation.to_string()))
            }
        }
    }
}

/// Request-sending component shared by the resource clients.
///
/// Resource clients hold an `Arc<dyn ApiTransport>` rather than building
/// requests themselves. [`WebmateApiClient`] is the HTTP implementation;
/// tests can substitute their own.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends a GET request. `query` is appended in the given order.
    async fn send_get(
        &self,
        template: &UriTemplate,
        path_params: &Params<'_>,
        query: &Params<'_>,
    ) -> Result<ApiResponse>;

    /// Sends a POST request with an optional JSON body.
    async fn send_post(
        &self,
        template: &UriTemplate,
        path_params: &Params<'_>,
        body: Option<&Value>,
    ) -> Result<ApiResponse>;

    /// Sends a DELETE request.
    async fn send_delete(
        &self,
        template: &UriTemplate,
        path_params: &Params<'_>,
    ) -> Result<ApiResponse>;
}

/// The HTTP client for the webmate REST API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use webmate_sdk::api::WebmateApiClient;
/// use webmate_sdk::auth::WebmateAuthInfo;
/// use webmate_sdk::session::WebmateEnvironment;
///
/// let client = WebmateApiClient::new(
///     WebmateAuthInfo::new("jane@example.com", "token"),
///     WebmateEnvironment::default(),
/// )?;
/// # Ok::<(), webmate_sdk::api::ApiError>(())
/// ```
///
/// Use [`WebmateApiClient::with_client_builder`] to route through a proxy or
/// adjust TLS settings.
pub struct WebmateApiClient {
    /// The underlying HTTP client
    http: Client,
    /// Credentials attached to every request
    auth: WebmateAuthInfo,
    /// The target installation
    environment: WebmateEnvironment,
}

impl WebmateApiClient {
    /// Creates a client with default transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client could not be built
    /// (e.g. the TLS backend failed to initialize).
    pub fn new(auth: WebmateAuthInfo, environment: WebmateEnvironment) -> Result<Self> {
        Self::with_client_builder(auth, environment, Client::builder())
    }

    /// Creates a client from a caller-configured reqwest builder.
    ///
    /// The `User-Agent` header is always set by this client.
    pub fn with_client_builder(
        auth: WebmateAuthInfo,
        environment: WebmateEnvironment,
        builder: ClientBuilder,
    ) -> Result<Self> {
        Ok(Self {
            http: builder
                .user_agent(format!("webmate-sdk/{}", crate::VERSION))
                .build()?,
            auth,
            environment,
        })
    }

    /// Creates a client for a session's credentials and environment.
    pub fn for_session(session: &WebmateApiSession) -> Result<Self> {
        Self::new(session.auth_info().clone(), session.environment().clone())
    }

    /// Creates a client for a session with a custom reqwest builder.
    pub fn for_session_with_builder(
        session: &WebmateApiSession,
        builder: ClientBuilder,
    ) -> Result<Self> {
        Self::with_client_builder(
            session.auth_info().clone(),
            session.environment().clone(),
            builder,
        )
    }

    /// The target installation.
    pub fn environment(&self) -> &WebmateEnvironment {
        &self.environment
    }

    async fn send(
        &self,
        method: Method,
        template: &UriTemplate,
        path_params: &Params<'_>,
        query: &Params<'_>,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let path = template.resolve(path_params)?;
        let url = self.environment.endpoint(&path)?;

        let mut request = self.http.request(method.clone(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request = self.auth.apply_to_request(request);

        let response = request.send().await?;
        let status = response.status();
        debug!(%method, %path, %status, "webmate api call");

        if status == StatusCode::NOT_FOUND {
            return Ok(ApiResponse::Absent);
        }

        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_status(status, &text));
        }

        Ok(ApiResponse::Present(HttpResponse::new(status, text)))
    }
}

#[async_trait]
impl ApiTransport for WebmateApiClient {
    async fn send_get(
        &self,
        template: &UriTemplate,
        path_params: &Params<'_>,
        query: &Params<'_>,
    ) -> Result<ApiResponse> {
        self.send(Method::GET, template, path_params, query, None).await
    }

    async fn send_post(
        &self,
        template: &UriTemplate,
        path_params: &Params<'_>,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        self.send(Method::POST, template, path_params, &[], body).await
    }

    async fn send_delete(
        &self,
        template: &UriTemplate,
        path_params: &Params<'_>,
    ) -> Result<ApiResponse> {
        self.send(Method::DELETE, template, path_params, &[], None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PING: UriTemplate = UriTemplate::new("/ping/${id}");

    fn client(base_url: &str) -> WebmateApiClient {
        WebmateApiClient::new(
            WebmateAuthInfo::new("jane@example.com", "token"),
            WebmateEnvironment::new(base_url).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_absent_into_option() {
        assert_eq!(ApiResponse::Absent.into_option(), None);
        let present = ApiResponse::Present(HttpResponse::new(StatusCode::OK, "{}"));
        assert!(present.is_present());
        assert_eq!(present.into_option().unwrap().body(), "{}");
    }

    #[test]
    fn test_require_absent_is_error() {
        let err = ApiResponse::Absent.require("finish TestRun").unwrap_err();
        assert!(matches!(err, ApiError::NoResponse(ref op) if op == "finish TestRun"));
    }

    #[test]
    fn test_empty_body_counts_as_no_response() {
        let empty = || ApiResponse::Present(HttpResponse::new(StatusCode::NO_CONTENT, ""));

        assert!(empty().into_option().is_none());
        assert!(matches!(
            empty().require("start TestExecution"),
            Err(ApiError::NoResponse(_))
        ));
        assert!(empty().ensure_found("finish TestRun").is_ok());
    }

    #[test]
    fn test_ensure_found_absent_is_error() {
        let err = ApiResponse::Absent.ensure_found("finish TestRun").unwrap_err();
        assert_eq!(err.to_string(), "Could not finish TestRun. Got no response");
    }

    #[test]
    fn test_http_response_json_error() {
        let response = HttpResponse::new(StatusCode::OK, "<html>");
        let err = response.json::<Vec<String>>("TestInfo").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization { .. }));
    }

    #[test]
    fn test_missing_path_param_fails_before_sending() {
        let client = client("http://127.0.0.1:1");
        let err = tokio_test::block_on(client.send_get(&PING, &[], &[])).unwrap_err();
        assert!(matches!(err, ApiError::Template { .. }));
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // Nothing listens on port 1
        let client = client("http://127.0.0.1:1");
        let err = tokio_test::block_on(client.send_delete(&PING, &[("id", "x".to_string())]))
            .unwrap_err();
        assert!(err.is_transport());
    }
}
