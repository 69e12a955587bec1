use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use super::Config;

/// Connect to `DATABASE_URL` and apply pending migrations.
pub async fn establish_connection(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Successfully connected to the database");

    // Run migrations automatically on startup
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied successfully");

    Ok(pool)
}
