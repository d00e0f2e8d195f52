use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
};
use std::path::Path;
use std::time::Duration;

/// Embedded migrations (categories + items schema)
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a SQLite connection pool, creating the database file if needed
pub async fn create_pool(database_path: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Opening database at: {}", database_path);

    // Create parent directory if it doesn't exist
    if let Some(parent) = Path::new(database_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}
