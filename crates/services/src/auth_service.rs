use std::sync::Arc;

use storage::repository::{AuthSessionRecord, AuthSessionRepository};

use crate::error::AuthServiceError;

/// Persisted bearer-token session.
///
/// There is no login flow in this build; the token is pasted in Settings or
/// supplied through the environment.
#[derive(Clone)]
pub struct AuthService {
    sessions: Arc<dyn AuthSessionRepository>,
}

impl AuthService {
    #[must_use]
    pub fn new(sessions: Arc<dyn AuthSessionRepository>) -> Self {
        Self { sessions }
    }

    /// The persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError` for storage failures.
    pub async fn current_token(&self) -> Result<Option<String>, AuthServiceError> {
        Ok(self
            .sessions
            .load_session()
            .await?
            .map(|record| record.token))
    }

    /// Persist a new token, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::EmptyToken` for a blank token, or a
    /// storage failure.
    pub async fn sign_in(&self, token: &str) -> Result<(), AuthServiceError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthServiceError::EmptyToken);
        }
        self.sessions
            .save_session(&AuthSessionRecord::new(token))
            .await?;
        Ok(())
    }

    /// Drop the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError` for storage failures.
    pub async fn sign_out(&self) -> Result<(), AuthServiceError> {
        self.sessions.clear_session().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryAuthSessions;

    #[tokio::test]
    async fn sign_in_trims_and_persists_the_token() {
        let service = AuthService::new(Arc::new(InMemoryAuthSessions::default()));
        service.sign_in("  token-1  ").await.unwrap();
        assert_eq!(
            service.current_token().await.unwrap(),
            Some("token-1".to_string())
        );
    }

    #[tokio::test]
    async fn blank_token_is_rejected() {
        let service = AuthService::new(Arc::new(InMemoryAuthSessions::default()));
        let err = service.sign_in("   ").await.unwrap_err();
        assert!(matches!(err, AuthServiceError::EmptyToken));
    }

    #[tokio::test]
    async fn sign_out_clears_the_session() {
        let service = AuthService::new(Arc::new(InMemoryAuthSessions::default()));
        service.sign_in("token-1").await.unwrap();
        service.sign_out().await.unwrap();
        assert!(service.current_token().await.unwrap().is_none());
    }
}
