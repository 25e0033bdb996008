use sqlx::PgPool;

use catalog_app::repository::UserRepository;
use catalog_types::common::User;
use catalog_types::errors::{ApplicationError, DbError};

use crate::models::UserRow;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, name: String, lastname: String) -> Result<(), ApplicationError> {
        sqlx::query("INSERT INTO users (name, lastname) VALUES ($1, $2)")
            .bind(&name)
            .bind(&lastname)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<User>, ApplicationError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, lastname FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: i32,
        name: String,
        lastname: String,
    ) -> Result<(), ApplicationError> {
        let result = sqlx::query("UPDATE users SET name = $2, lastname = $3 WHERE id = $1")
            .bind(id)
            .bind(&name)
            .bind(&lastname)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::UserNotFound(id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ApplicationError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::UserNotFound(id)));
        }
        Ok(())
    }
}
