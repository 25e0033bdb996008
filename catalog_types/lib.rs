pub mod common;
pub mod errors;

pub use errors::{ApplicationError, DbError, RelayError, Result};
