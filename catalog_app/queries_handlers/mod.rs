mod get_all_products;
mod get_all_users;
mod get_product_by_id;

pub use get_all_products::GetAllProductsHandler;
pub use get_all_users::GetAllUsersHandler;
pub use get_product_by_id::GetProductByIdHandler;
