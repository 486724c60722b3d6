use std::sync::{Mutex, MutexGuard, PoisonError};

/// Holds the bearer token for the lifetime of the application.
///
/// Constructed once at startup and owned by the gateway. The token is
/// absent until the first authenticated call and cleared again whenever the
/// upstream answers 401.
#[derive(Debug, Default)]
pub struct Session {
    token: Mutex<Option<String>>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.lock().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.lock() = Some(token.into());
    }

    pub fn clear(&self) {
        self.lock().take();
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        // A panic while holding the lock cannot leave an Option half-written.
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// How `authenticate` obtained its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The login endpoint returned a token.
    Issued(String),
    /// The login endpoint failed or returned no token; the configured
    /// fallback token was stored instead.
    Fallback(String),
}

impl AuthOutcome {
    /// The token now stored in the session.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Issued(token) | Self::Fallback(token) => token,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.set_token("abc");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc"));

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_auth_outcome_token() {
        let issued = AuthOutcome::Issued("real".to_string());
        let fallback = AuthOutcome::Fallback("demo-token-123".to_string());

        assert_eq!(issued.token(), "real");
        assert!(!issued.is_fallback());
        assert_eq!(fallback.token(), "demo-token-123");
        assert!(fallback.is_fallback());
    }
}
