use crate::cqrs::Command;

#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub price: f32,
}

impl Command for CreateProduct {}

#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub id: i32,
    pub name: String,
    pub price: f32,
}

impl Command for UpdateProduct {}

#[derive(Debug, Clone)]
pub struct DeleteProduct {
    pub id: i32,
}

impl Command for DeleteProduct {}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub lastname: String,
}

impl Command for CreateUser {}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub id: i32,
    pub name: String,
    pub lastname: String,
}

impl Command for UpdateUser {}

#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub id: i32,
}

impl Command for DeleteUser {}
