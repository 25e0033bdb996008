use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use catalog_app::{
    command_handlers::{
        CreateProductCommandHandler, DeleteProductCommandHandler, UpdateProductCommandHandler,
    },
    cqrs::{
        commands::{CreateProduct, DeleteProduct, UpdateProduct},
        queries::{GetAllProducts, GetProductById},
    },
    queries_handlers::{GetAllProductsHandler, GetProductByIdHandler},
};

use crate::{error::WebError, http::AppState};

/// Body for product creation and update.
#[derive(serde::Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: f32,
}

/// POST /products – Create a product; the store assigns the id.
pub async fn create_product(
    State(state): State<AppState>,
    Json(form): Json<ProductForm>,
) -> Result<impl IntoResponse, WebError> {
    let command = CreateProduct {
        name: form.name,
        price: form.price,
    };
    state
        .app_bus
        .execute(command, CreateProductCommandHandler::new())
        .await?;

    Ok(StatusCode::CREATED)
}

/// GET /products – List the whole catalog.
pub async fn get_all_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, WebError> {
    let products = state
        .app_bus
        .query(GetAllProducts {}, GetAllProductsHandler::new())
        .await?;

    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WebError> {
    let product = state
        .app_bus
        .query(GetProductById { id }, GetProductByIdHandler::new())
        .await?;

    Ok(Json(product))
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(form): Json<ProductForm>,
) -> Result<impl IntoResponse, WebError> {
    let command = UpdateProduct {
        id,
        name: form.name,
        price: form.price,
    };
    state
        .app_bus
        .execute(command, UpdateProductCommandHandler::new())
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WebError> {
    state
        .app_bus
        .execute(DeleteProduct { id }, DeleteProductCommandHandler::new())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
