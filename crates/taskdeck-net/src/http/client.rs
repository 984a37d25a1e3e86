//! REST client for the task backend.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskdeck_net::ApiConfig;
//! use taskdeck_net::auth::AuthSession;
//! use taskdeck_net::http::ApiClient;
//!
//! # async fn run() -> taskdeck_net::Result<()> {
//! let session = Arc::new(AuthSession::in_memory());
//! session.login("maria", "s3cr3t")?;
//!
//! let client = ApiClient::from_config(&ApiConfig::default(), Some(session))?;
//! let body: serde_json::Value = client.get("/tasks/").query("page", "0").send_json().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use taskdeck_core::logging::targets;
use tracing::Instrument;

use super::request::{ApiRequest, HttpMethod, RequestBody};
use super::response::ApiResponse;
use crate::auth::AuthSession;
use crate::config::{ApiConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::{ApiError, Result};

/// Builder for creating an [`ApiClient`].
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    session: Option<Arc<AuthSession>>,
}

impl ApiClientBuilder {
    /// Create a new builder for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session: None,
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach credentials from `session` to every request.
    pub fn session(mut self, session: Arc<AuthSession>) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient> {
        // Trailing slash removed so paths can always start with one.
        let base_url = self.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(format!("TaskDeck/{} (Rust)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url,
                http,
                session: self.session,
            }),
        })
    }
}

struct ApiClientInner {
    base_url: String,
    http: reqwest::Client,
    session: Option<Arc<AuthSession>>,
}

/// A client for the task backend.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

impl ApiClient {
    /// Create a new builder for configuring a client.
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Create a client from loaded settings.
    pub fn from_config(config: &ApiConfig, session: Option<Arc<AuthSession>>) -> Result<Self> {
        let mut builder = Self::builder(&config.base_url).timeout(config.timeout());
        if let Some(session) = session {
            builder = builder.session(session);
        }
        builder.build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The session whose credentials are attached, if any.
    pub fn session(&self) -> Option<&Arc<AuthSession>> {
        self.inner.session.as_ref()
    }

    /// Create a GET request builder.
    pub fn get(&self, path: &str) -> ApiRequestBuilder {
        self.request(HttpMethod::Get, path)
    }

    /// Create a POST request builder.
    pub fn post(&self, path: &str) -> ApiRequestBuilder {
        self.request(HttpMethod::Post, path)
    }

    /// Create a PUT request builder.
    pub fn put(&self, path: &str) -> ApiRequestBuilder {
        self.request(HttpMethod::Put, path)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, path: &str) -> ApiRequestBuilder {
        self.request(HttpMethod::Delete, path)
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, path: &str) -> ApiRequestBuilder {
        self.request(HttpMethod::Patch, path)
    }

    /// Create a request builder with a custom method.
    pub fn request(&self, method: HttpMethod, path: &str) -> ApiRequestBuilder {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        ApiRequestBuilder {
            client: self.clone(),
            method,
            url: format!("{}{}", self.inner.base_url, path),
            query: Vec::new(),
            body: RequestBody::None,
            body_error: None,
            timeout: None,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("has_session", &self.inner.session.is_some())
            .finish()
    }
}

/// Builder for a single request.
pub struct ApiRequestBuilder {
    client: ApiClient,
    method: HttpMethod,
    url: String,
    query: Vec<(String, String)>,
    body: RequestBody,
    body_error: Option<String>,
    timeout: Option<Duration>,
}

impl ApiRequestBuilder {
    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add multiple query parameters.
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set a JSON body from a serializable value.
    ///
    /// A value that fails to serialize makes `send` fail with
    /// [`ApiError::Decode`].
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = RequestBody::Json(value),
            Err(e) => self.body_error = Some(e.to_string()),
        }
        self
    }

    /// Set a timeout for this specific request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the request without sending it.
    pub fn build(&self) -> ApiRequest {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        if let Some(value) = self
            .client
            .session()
            .and_then(|s| s.authorization_header())
            .and_then(|h| http::HeaderValue::try_from(h).ok())
        {
            headers.insert(http::header::AUTHORIZATION, value);
        }

        ApiRequest {
            method: self.method,
            url: self.url.clone(),
            headers,
            query: self.query.clone(),
            body: self.body.clone(),
            timeout: self.timeout,
        }
    }

    /// Send the request and return the raw response, whatever its status.
    pub async fn send(self) -> Result<ApiResponse> {
        if let Some(e) = &self.body_error {
            return Err(ApiError::Decode(e.clone()));
        }
        let request = self.build();
        let span = tracing::debug_span!(
            target: targets::HTTP,
            "request",
            method = %request.method,
            url = %request.url
        );
        Self::execute(&self.client.inner.http, request)
            .instrument(span)
            .await
    }

    /// Send the request and parse a 2xx JSON response.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T> {
        self.send().await?.error_for_status().await?.json().await
    }

    /// Send the request, expecting a 2xx response whose body is ignored.
    pub async fn send_empty(self) -> Result<()> {
        self.send().await?.error_for_status().await?;
        Ok(())
    }

    async fn execute(http_client: &reqwest::Client, request: ApiRequest) -> Result<ApiResponse> {
        let url = request.full_url()?;
        let mut req_builder = http_client
            .request(request.method.to_reqwest(), url)
            .headers(request.headers);

        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }
        if let RequestBody::Json(value) = &request.body {
            req_builder = req_builder.json(value);
        }

        let response = req_builder.send().await.map_err(|e| {
            tracing::warn!(target: targets::HTTP, error = %e, "request failed");
            ApiError::from(e)
        })?;

        let response = ApiResponse::from_reqwest(response);
        if response.is_success() {
            tracing::debug!(target: targets::HTTP, status = response.status(), "response");
        } else {
            tracing::warn!(target: targets::HTTP, status = response.status(), "error response");
        }
        Ok(response)
    }
}
