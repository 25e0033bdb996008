mod product_repository;
mod user_repository;

pub use product_repository::PostgresProductRepository;
pub use user_repository::PostgresUserRepository;
