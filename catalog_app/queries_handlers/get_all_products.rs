use catalog_types::Result;
use catalog_types::common::Product;

use crate::{
    app_bus::HandlerContext,
    cqrs::{QueryHandler, queries::GetAllProducts},
};

pub struct GetAllProductsHandler {}

impl GetAllProductsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl QueryHandler<GetAllProducts> for GetAllProductsHandler {
    async fn handle(&self, _query: GetAllProducts, ctx: &HandlerContext) -> Result<Vec<Product>> {
        ctx.products.get_all().await
    }
}
