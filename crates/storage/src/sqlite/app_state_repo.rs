use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{AppStateRepository, StorageError};
use wander_core::model::CountryId;

use super::SqliteRepository;

#[async_trait]
impl AppStateRepository for SqliteRepository {
    async fn selected_country(&self) -> Result<Option<CountryId>, StorageError> {
        let row = sqlx::query("SELECT selected_country_id FROM app_state WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: Option<i64> = row
            .try_get("selected_country_id")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(raw
            .and_then(|value| u64::try_from(value).ok())
            .map(CountryId::new))
    }

    async fn set_selected_country(&self, country: Option<CountryId>) -> Result<(), StorageError> {
        let raw = country.and_then(|id| i64::try_from(id.value()).ok());
        sqlx::query(
            r"
            INSERT INTO app_state (id, selected_country_id)
            VALUES (1, ?1)
            ON CONFLICT(id) DO UPDATE SET
                selected_country_id = excluded.selected_country_id
            ",
        )
        .bind(raw)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
