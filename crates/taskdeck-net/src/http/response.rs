//! HTTP response types.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// A response from the backend.
pub struct ApiResponse {
    inner: reqwest::Response,
}

impl ApiResponse {
    /// Create from a reqwest response.
    pub(crate) fn from_reqwest(response: reqwest::Response) -> Self {
        Self { inner: response }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get a specific header value.
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        self.inner
            .headers()
            .get(name.as_ref())
            .and_then(|v| v.to_str().ok())
    }

    /// Turn a non-2xx response into the matching [`ApiError`].
    pub async fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let status = self.status();
        let body = self.inner.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        Ok(self.inner.text().await?)
    }

    /// Parse the response body as JSON.
    ///
    /// The body is read as text first so an empty or malformed body reports
    /// [`ApiError::Decode`] with the parser's message.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let text = self.inner.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl std::fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status())
            .field("url", &self.inner.url().as_str())
            .finish()
    }
}
