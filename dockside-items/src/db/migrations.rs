//! Schema bootstrap for the items table

use sqlx::PgConnection;

use super::StorageError;

/// Create the `items` table if it does not exist yet.
pub async fn run(conn: &mut PgConnection) -> Result<(), StorageError> {
    tracing::info!("Ensuring items table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(conn)
    .await?;

    Ok(())
}
