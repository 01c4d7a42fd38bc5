#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    AppStateRepository, AuthSessionRecord, AuthSessionRepository, Storage, StorageError,
};
pub use sqlite::SqliteInitError;
