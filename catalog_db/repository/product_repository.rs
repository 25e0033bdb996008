use sqlx::PgPool;

use catalog_app::repository::ProductRepository;
use catalog_types::common::Product;
use catalog_types::errors::{ApplicationError, DbError};

use crate::models::ProductRow;

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, name: String, price: f32) -> Result<(), ApplicationError> {
        sqlx::query("INSERT INTO products (name, price) VALUES ($1, $2)")
            .bind(&name)
            .bind(price)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, ApplicationError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        match row {
            Some(row) => Ok(row.into()),
            None => Err(ApplicationError::Db(DbError::ProductNotFound(id))),
        }
    }

    async fn get_all(&self) -> Result<Vec<Product>, ApplicationError> {
        let rows =
            sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, name: String, price: f32) -> Result<(), ApplicationError> {
        let result = sqlx::query("UPDATE products SET name = $2, price = $3 WHERE id = $1")
            .bind(id)
            .bind(&name)
            .bind(price)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::ProductNotFound(id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ApplicationError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::ProductNotFound(id)));
        }
        Ok(())
    }
}
