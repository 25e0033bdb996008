use sqlx::FromRow;

use catalog_types::common::{Product, User};

#[derive(Debug, FromRow, Clone)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: f32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
        }
    }
}

#[derive(Debug, FromRow, Clone)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub lastname: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            lastname: row.lastname,
        }
    }
}
