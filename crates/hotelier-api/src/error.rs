//! Error taxonomy for backend calls.

use serde::Deserialize;

/// Result alias used across the API crate.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single backend call.
///
/// `Unauthorized` is special: by the time the caller sees it, the transport
/// has already cleared the session and broadcast the session event. Nothing
/// is swallowed; every variant reaches the calling controller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// Map a non-2xx status plus the backend's error body (if any) into the
    /// taxonomy. 401 is handled by the transport before this runs.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = backend_message(body)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        match status {
            404 => Self::NotFound(message),
            400 | 422 => Self::Validation(message),
            _ => Self::Api { status, message },
        }
    }

    /// Backend-provided message when one exists, for notice rendering.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::NotFound(msg) | Self::Validation(msg) => Some(msg),
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
}
