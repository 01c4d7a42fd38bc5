//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use wander_core::model::AnswerError;

/// Errors emitted by the REST API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("no auth token configured")]
    MissingAuth,
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while walking and submitting the question flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    /// The current question has no valid answer yet. Recoverable by user
    /// input; never logged as an error.
    #[error("current question has no valid answer")]
    Unanswered,
    /// There is no pending question to submit (empty or finished flow).
    #[error("no pending question")]
    Exhausted,
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Submit(#[from] ApiError),
}

/// Errors emitted by `CountryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CountryServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthServiceError {
    #[error("token must not be empty")]
    EmptyToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
