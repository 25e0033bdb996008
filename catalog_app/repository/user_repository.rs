use catalog_types::ApplicationError;
use catalog_types::common::User;

/// Store capability for users. The observed surface has no user lookup by
/// id, so the trait does not carry one.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Saves a new user. The store assigns the id.
    async fn create(&self, name: String, lastname: String) -> Result<(), ApplicationError>;

    /// List all users.
    async fn get_all(&self) -> Result<Vec<User>, ApplicationError>;

    /// Update name and lastname of an existing user.
    async fn update(&self, id: i32, name: String, lastname: String) -> Result<(), ApplicationError>;

    /// Delete a user by id.
    async fn delete(&self, id: i32) -> Result<(), ApplicationError>;
}
