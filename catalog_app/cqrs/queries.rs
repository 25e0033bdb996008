use catalog_types::common::{Product, User};

use crate::cqrs::Query;

/// Fetch a single product by id.
pub struct GetProductById {
    pub id: i32,
}

impl Query for GetProductById {
    type Output = Product;
}

/// Fetch the whole product catalog.
pub struct GetAllProducts {}

impl Query for GetAllProducts {
    type Output = Vec<Product>;
}

/// Fetch all users.
pub struct GetAllUsers {}

impl Query for GetAllUsers {
    type Output = Vec<User>;
}
