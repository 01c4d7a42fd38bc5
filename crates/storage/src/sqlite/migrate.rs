use sqlx::SqlitePool;

use super::SqliteInitError;

/// Idempotent schema setup.
pub(crate) async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS auth_session (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            token TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS app_state (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            selected_country_id INTEGER
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
