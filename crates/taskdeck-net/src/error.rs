//! Error types for the networking layer.

use serde::Deserialize;

/// Failures crossing the backend boundary.
///
/// Every variant maps to a pre-formatted pt-BR message through
/// [`ApiError::user_message`], so callers can show it without inspecting it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Credentials missing or rejected (HTTP 401/403).
    #[error("authentication failed: {0}")]
    Auth(String),
    /// The backend could not be reached or did not answer in time.
    #[error("network error: {0}")]
    Network(String),
    /// The backend refused the request (other 4xx).
    #[error("request rejected (HTTP {status}): {message}")]
    Validation {
        /// The HTTP status code.
        status: u16,
        /// Message from the response body, passed through verbatim.
        message: String,
    },
    /// The backend failed (5xx).
    #[error("server error (HTTP {status}): {message}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// Message from the response body, if any.
        message: String,
    },
    /// A response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A malformed base URL or path.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Reading or writing the credential file failed.
    #[error("credential storage error: {0}")]
    Storage(#[from] std::io::Error),
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shape of the backend's error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response.
    ///
    /// The message is taken from a JSON `{"message": ...}` body when present,
    /// otherwise from the raw body text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            401 | 403 => Self::Auth(format!("HTTP {status}")),
            400..=499 => Self::Validation {
                status,
                message: if message.is_empty() {
                    format!("HTTP {status}")
                } else {
                    message
                },
            },
            _ => Self::Server { status, message },
        }
    }

    /// Title for an error toast.
    pub fn summary(&self) -> &'static str {
        "Erro"
    }

    /// The text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(_) => "Usuário ou senha inválidos".to_string(),
            Self::Network(_) => {
                "Não foi possível conectar ao servidor. Tente novamente.".to_string()
            }
            Self::Validation { message, .. } => message.clone(),
            Self::Server { message, .. } if !message.is_empty() => message.clone(),
            Self::Server { .. } => "Erro no servidor. Tente novamente mais tarde.".to_string(),
            Self::Decode(_) => "Resposta inválida do servidor".to_string(),
            Self::InvalidUrl(_) | Self::Config(_) => "Configuração inválida".to_string(),
            Self::Storage(_) => "Não foi possível acessar as credenciais salvas".to_string(),
        }
    }

    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Server { .. })
    }

    /// HTTP status behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status.as_u16(), "")
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A specialized Result type for network operations.
pub type Result<T> = std::result::Result<T, ApiError>;
