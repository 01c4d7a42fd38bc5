use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use wander_core::model::CountryId;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the signed-in session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSessionRecord {
    pub token: String,
}

impl AuthSessionRecord {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Repository contract for the auth session.
///
/// At most one session row exists; saving replaces it.
#[async_trait]
pub trait AuthSessionRepository: Send + Sync {
    /// Load the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be read.
    async fn load_session(&self) -> Result<Option<AuthSessionRecord>, StorageError>;

    /// Persist or replace the session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be written.
    async fn save_session(&self, record: &AuthSessionRecord) -> Result<(), StorageError>;

    /// Remove any persisted session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    async fn clear_session(&self) -> Result<(), StorageError>;
}

/// Repository contract for small persisted app state.
#[async_trait]
pub trait AppStateRepository: Send + Sync {
    /// The travel country the user last selected.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be read.
    async fn selected_country(&self) -> Result<Option<CountryId>, StorageError>;

    /// Persist the selected travel country. `None` clears the selection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be written.
    async fn set_selected_country(&self, country: Option<CountryId>) -> Result<(), StorageError>;
}

/// Bundle of repository handles the services layer is built from.
#[derive(Clone)]
pub struct Storage {
    pub auth_sessions: Arc<dyn AuthSessionRepository>,
    pub app_state: Arc<dyn AppStateRepository>,
}

//
// ─── IN-MEMORY ADAPTERS ───────────────────────────────────────────────────────
//

/// Mutex-backed session store for tests and ephemeral runs.
#[derive(Default)]
pub struct InMemoryAuthSessions {
    session: Mutex<Option<AuthSessionRecord>>,
}

#[async_trait]
impl AuthSessionRepository for InMemoryAuthSessions {
    async fn load_session(&self) -> Result<Option<AuthSessionRecord>, StorageError> {
        Ok(self
            .session
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?
            .clone())
    }

    async fn save_session(&self, record: &AuthSessionRecord) -> Result<(), StorageError> {
        *self
            .session
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))? = Some(record.clone());
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        *self
            .session
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))? = None;
        Ok(())
    }
}

/// Mutex-backed app state for tests and ephemeral runs.
#[derive(Default)]
pub struct InMemoryAppState {
    selected_country: Mutex<Option<CountryId>>,
}

#[async_trait]
impl AppStateRepository for InMemoryAppState {
    async fn selected_country(&self) -> Result<Option<CountryId>, StorageError> {
        Ok(*self
            .selected_country
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?)
    }

    async fn set_selected_country(&self, country: Option<CountryId>) -> Result<(), StorageError> {
        *self
            .selected_country
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))? = country;
        Ok(())
    }
}

impl Storage {
    /// Build a `Storage` that keeps everything in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            auth_sessions: Arc::new(InMemoryAuthSessions::default()),
            app_state: Arc::new(InMemoryAppState::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_session_round_trips() {
        let storage = Storage::in_memory();
        assert!(storage.auth_sessions.load_session().await.unwrap().is_none());

        let record = AuthSessionRecord::new("token-1");
        storage.auth_sessions.save_session(&record).await.unwrap();
        assert_eq!(
            storage.auth_sessions.load_session().await.unwrap(),
            Some(record)
        );

        storage.auth_sessions.clear_session().await.unwrap();
        assert!(storage.auth_sessions.load_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn in_memory_selected_country_round_trips() {
        let storage = Storage::in_memory();
        storage
            .app_state
            .set_selected_country(Some(CountryId::new(9)))
            .await
            .unwrap();
        assert_eq!(
            storage.app_state.selected_country().await.unwrap(),
            Some(CountryId::new(9))
        );
    }
}
