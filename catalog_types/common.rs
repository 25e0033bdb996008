use serde::{Deserialize, Serialize};

/// A catalog product. The id is assigned by the store on creation and
/// immutable afterwards.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f32,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: f32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// A catalog user.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub lastname: String,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            lastname: lastname.into(),
        }
    }
}
