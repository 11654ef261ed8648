use std::sync::RwLock;

/// Bearer-token holder for the current user session.
///
/// An explicit, process-wide context object with a defined lifecycle:
/// created once, populated at login via [`begin`](Self::begin), cleared at
/// logout via [`clear`](Self::clear). Shared with the service clients
/// through `Arc` — never an ambient singleton.
#[derive(Debug, Default)]
pub struct AuthSession {
    token: RwLock<Option<String>>,
}

impl AuthSession {
    /// Create a session with no token. Requests built against it carry
    /// no `Authorization` header until `begin` is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that is already authenticated.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.begin(token);
        session
    }

    /// Start (or replace) the session with the given bearer token.
    pub fn begin(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.into());
    }

    /// End the session (logout). Subsequent requests are sent without an
    /// auth header; the server is responsible for rejecting them.
    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// Snapshot of the current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
