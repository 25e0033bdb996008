mod connection;
mod models;
mod repository;

pub use connection::{DbPool, establish_connection_pool};
pub use repository::*;
