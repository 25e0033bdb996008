use catalog_types::ApplicationError;
use catalog_types::common::Product;

/// Store capability for products. The store owns persistence, identity
/// assignment and existence checks; callers never validate on its behalf.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    /// Saves a new product. The store assigns the id.
    async fn create(&self, name: String, price: f32) -> Result<(), ApplicationError>;

    /// Find a product by id.
    async fn get_by_id(&self, id: i32) -> Result<Product, ApplicationError>;

    /// List all products.
    async fn get_all(&self) -> Result<Vec<Product>, ApplicationError>;

    /// Update name and price of an existing product.
    async fn update(&self, id: i32, name: String, price: f32) -> Result<(), ApplicationError>;

    /// Delete a product by id.
    async fn delete(&self, id: i32) -> Result<(), ApplicationError>;
}
