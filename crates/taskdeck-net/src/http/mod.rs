//! HTTP plumbing for the task backend.
//!
//! [`ApiClient`] prefixes paths with the configured base URL, attaches the
//! session's Basic credentials and maps non-2xx responses to
//! [`ApiError`](crate::ApiError).

mod client;
mod request;
mod response;

pub use client::{ApiClient, ApiClientBuilder, ApiRequestBuilder};
pub use request::{ApiRequest, HttpMethod, RequestBody};
pub use response::ApiResponse;
