use crate::error::ImportError;
use sea_orm::{Database, DatabaseConnection};

/// Creates a database connection from the `DATABASE_URL` environment
/// variable (loaded from `.env` when present). Missing configuration is a
/// fatal error before any import work begins.
pub async fn create_connection() -> Result<DatabaseConnection, ImportError> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL")
        .map_err(|_| ImportError::Config("DATABASE_URL is not set".to_string()))?;

    Ok(Database::connect(&url).await?)
}
