use thiserror::Error;

/// Errors for store operations.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Product with ID {0} not found")]
    ProductNotFound(i32),

    #[error("User with ID {0} not found")]
    UserNotFound(i32),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Connection error: {0}")]
    Connection(String),
}
