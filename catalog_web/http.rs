use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use catalog_app::app_bus::AppBus;
use catalog_types::{ApplicationError, Result};

use crate::handlers::{
    create_product, create_user, delete_product, delete_user, get_all_products, get_all_users,
    get_product_by_id, update_product, update_user,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        AppState { app_bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn build(state: AppState) -> Router {
        Router::new()
            .route("/products", post(create_product).get(get_all_products))
            .route("/products/{id}", get(get_product_by_id))
            .route("/products/{id}", put(update_product))
            .route("/products/{id}", delete(delete_product))
            .route("/users", post(create_user).get(get_all_users))
            .route("/users/{id}", put(update_user))
            .route("/users/{id}", delete(delete_user))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::build(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            let err = format!("{:#?}", e);
            ApplicationError::Infrastructure(err)
        })?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
