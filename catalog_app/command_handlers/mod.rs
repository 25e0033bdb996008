mod create_product;
mod create_user;
mod delete_product;
mod delete_user;
mod update_product;
mod update_user;

pub use create_product::CreateProductCommandHandler;
pub use create_user::CreateUserCommandHandler;
pub use delete_product::DeleteProductCommandHandler;
pub use delete_user::DeleteUserCommandHandler;
pub use update_product::UpdateProductCommandHandler;
pub use update_user::UpdateUserCommandHandler;
