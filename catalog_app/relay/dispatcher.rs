use std::sync::Arc;

use crate::app_bus::AppBus;
use crate::command_handlers::{
    CreateProductCommandHandler, DeleteProductCommandHandler, UpdateProductCommandHandler,
};
use crate::cqrs::commands::{CreateProduct, DeleteProduct, UpdateProduct};
use crate::cqrs::queries::{GetAllProducts, GetProductById};
use crate::queries_handlers::{GetAllProductsHandler, GetProductByIdHandler};

use super::codec::{RelayCommand, RelayResult, ResultPayload};

pub const MSG_PRODUCT_CREATED: &str = "Producto creado exitosamente";
pub const MSG_PRODUCT_FOUND: &str = "Producto encontrado";
pub const MSG_PRODUCT_GET_ERROR: &str = "Error al obtener producto";
pub const MSG_PRODUCTS_FOUND: &str = "Productos encontrados";
pub const MSG_PRODUCTS_GET_ERROR: &str = "Error al obtener productos";
pub const MSG_PRODUCT_UPDATED: &str = "Producto actualizado exitosamente";
pub const MSG_PRODUCT_UPDATE_ERROR: &str = "Error al actualizar producto";
pub const MSG_PRODUCT_DELETED: &str = "Producto eliminado exitosamente";
pub const MSG_PRODUCT_DELETE_ERROR: &str = "Error al eliminar producto";

/// Routes a decoded command to its handler and shapes the outcome.
///
/// A pure translation layer: one handler per verb, one store call per
/// handler, no business rules. Existence checks live in the store.
#[derive(Clone)]
pub struct Dispatcher {
    bus: Arc<AppBus>,
}

impl Dispatcher {
    pub fn new(bus: Arc<AppBus>) -> Self {
        Self { bus }
    }

    pub async fn route(&self, command: RelayCommand) -> RelayResult {
        match command {
            // Create is fire-and-forget: a store failure is logged and the
            // success result still goes out, matching the wire contract.
            RelayCommand::Create { name, price } => {
                tracing::info!(product = %name, "saving product");
                let cmd = CreateProduct { name, price };
                if let Err(e) = self
                    .bus
                    .execute(cmd, CreateProductCommandHandler::new())
                    .await
                {
                    tracing::warn!("product create failed: {e}");
                }
                RelayResult::success(MSG_PRODUCT_CREATED)
            }

            RelayCommand::GetById { id } => {
                tracing::info!(product_id = id, "looking up product");
                match self
                    .bus
                    .query(GetProductById { id }, GetProductByIdHandler::new())
                    .await
                {
                    Ok(product) => RelayResult::success_with(
                        MSG_PRODUCT_FOUND,
                        ResultPayload::Record(product),
                    ),
                    Err(e) => {
                        tracing::warn!(product_id = id, "product lookup failed: {e}");
                        RelayResult::error(MSG_PRODUCT_GET_ERROR)
                    }
                }
            }

            RelayCommand::GetAll => {
                match self
                    .bus
                    .query(GetAllProducts {}, GetAllProductsHandler::new())
                    .await
                {
                    Ok(products) => RelayResult::success_with(
                        MSG_PRODUCTS_FOUND,
                        ResultPayload::Records(products),
                    ),
                    Err(e) => {
                        tracing::warn!("product listing failed: {e}");
                        RelayResult::error(MSG_PRODUCTS_GET_ERROR)
                    }
                }
            }

            RelayCommand::Update { id, name, price } => {
                tracing::info!(product_id = id, "updating product");
                let cmd = UpdateProduct { id, name, price };
                match self
                    .bus
                    .execute(cmd, UpdateProductCommandHandler::new())
                    .await
                {
                    Ok(()) => RelayResult::success(MSG_PRODUCT_UPDATED),
                    Err(e) => {
                        tracing::warn!(product_id = id, "product update failed: {e}");
                        RelayResult::error(MSG_PRODUCT_UPDATE_ERROR)
                    }
                }
            }

            RelayCommand::Delete { id } => {
                tracing::info!(product_id = id, "deleting product");
                match self
                    .bus
                    .execute(DeleteProduct { id }, DeleteProductCommandHandler::new())
                    .await
                {
                    Ok(()) => RelayResult::success(MSG_PRODUCT_DELETED),
                    Err(e) => {
                        tracing::warn!(product_id = id, "product delete failed: {e}");
                        RelayResult::error(MSG_PRODUCT_DELETE_ERROR)
                    }
                }
            }
        }
    }
}
