use thiserror::Error;

mod db_error;
mod relay_error;

pub use db_error::DbError;
pub use relay_error::RelayError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}
