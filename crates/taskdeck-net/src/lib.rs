//! Networking layer for TaskDeck.
//!
//! This crate connects the TaskDeck front end to its task backend:
//!
//! - **Configuration**: [`ApiConfig`], loaded from TOML
//! - **HTTP Client**: [`http::ApiClient`], a thin REST client with Basic auth
//! - **Session**: [`auth::AuthSession`], login state persisted through a
//!   [`auth::TokenStorage`]
//! - **Tasks**: [`task::TaskService`] plus the mapping between the backend's
//!   Portuguese field names and [`task::Task`]
//! - **Users**: [`user::UserService`] for registration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskdeck_net::auth::{AuthSession, FileTokenStorage};
//! use taskdeck_net::http::ApiClient;
//! use taskdeck_net::task::{Priority, TaskQuery, TaskService};
//! use taskdeck_net::ApiConfig;
//!
//! # async fn run() -> taskdeck_net::Result<()> {
//! let config = ApiConfig::load_toml("taskdeck.toml")?;
//! let session = Arc::new(AuthSession::new(FileTokenStorage::new(config.credentials_path()?))?);
//! if !session.is_logged_in() {
//!     session.login("maria", "s3cr3t")?;
//! }
//!
//! let tasks = TaskService::new(ApiClient::from_config(&config, Some(session))?);
//! let page = tasks.list(&TaskQuery::new().with_priority(Priority::Alta)).await?;
//! for task in &page.content {
//!     println!("{} ({:?})", task.name, task.situation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`ApiError`], whose
//! [`user_message`](ApiError::user_message) is ready to show in a toast.

pub mod auth;
mod config;
mod error;
pub mod http;
pub mod task;
pub mod user;

pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ApiError, Result};
