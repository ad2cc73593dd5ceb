//! Controller notices.
//!
//! Controllers broadcast transient, dismissible notices; the hosting shell
//! subscribes and renders them however it likes (toast, colored line, ...).

use hotelier_api::ApiError;

/// A user-facing notice emitted by a controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleEvent {
    Success(String),
    Failure(String),
}

/// Backend-provided message when one exists, generic fallback otherwise.
pub(crate) fn failure_message(action: &str, err: &ApiError) -> String {
    match err.backend_message() {
        Some(msg) => msg.to_string(),
        None => format!("Failed to {action}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_backend_message() {
        let err = ApiError::Validation("email already in use".into());
        assert_eq!(failure_message("update tenant", &err), "email already in use");
    }

    #[test]
    fn falls_back_per_action() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(failure_message("load tenants", &err), "Failed to load tenants");
    }
}
