use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;

use catalog_types::DbError;

pub type DbPool = PgPool;

pub async fn establish_connection_pool() -> Result<DbPool, DbError> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| DbError::Connection("DATABASE_URL must be set".to_string()))?;

    Ok(PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?)
}
