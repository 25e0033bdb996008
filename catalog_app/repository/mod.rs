mod product_repository;
mod user_repository;

pub use product_repository::ProductRepository;
pub use user_repository::UserRepository;
