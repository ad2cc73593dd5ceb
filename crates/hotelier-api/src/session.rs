//! Session credential store.
//!
//! The bearer credential lives in an explicitly shared store injected into
//! the transport at construction; there is no process-global token state.
//! Single writer (the transport's 401 handler and the hosting shell),
//! single relevant reader (the outgoing-request decorator).

use parking_lot::RwLock;
use std::sync::Arc;

/// Cheaply clonable holder for the current bearer token.
#[derive(Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing credential.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the credential itself.
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Session-level events the hosting shell subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A 401 was observed; the store has already been cleared. The shell
    /// decides what "redirect to login" means in its world.
    Unauthorized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_credential() {
        let store = SessionStore::new();
        let other = store.clone();

        store.set("secret");
        assert_eq!(other.token().as_deref(), Some("secret"));

        other.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn debug_never_leaks_the_token() {
        let store = SessionStore::with_token("super-secret");
        assert!(!format!("{store:?}").contains("super-secret"));
    }
}
