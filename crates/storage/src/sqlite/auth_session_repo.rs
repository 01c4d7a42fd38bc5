use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{AuthSessionRecord, AuthSessionRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl AuthSessionRepository for SqliteRepository {
    async fn load_session(&self) -> Result<Option<AuthSessionRecord>, StorageError> {
        let row = sqlx::query("SELECT token FROM auth_session WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let token: String = row
            .try_get("token")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(AuthSessionRecord { token }))
    }

    async fn save_session(&self, record: &AuthSessionRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO auth_session (id, token)
            VALUES (1, ?1)
            ON CONFLICT(id) DO UPDATE SET token = excluded.token
            ",
        )
        .bind(&record.token)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM auth_session WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
