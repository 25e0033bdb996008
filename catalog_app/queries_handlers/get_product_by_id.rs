use catalog_types::Result;
use catalog_types::common::Product;

use crate::{
    app_bus::HandlerContext,
    cqrs::{QueryHandler, queries::GetProductById},
};

pub struct GetProductByIdHandler {}

impl GetProductByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl QueryHandler<GetProductById> for GetProductByIdHandler {
    async fn handle(&self, query: GetProductById, ctx: &HandlerContext) -> Result<Product> {
        ctx.products.get_by_id(query.id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog_types::{ApplicationError, DbError, Result};

    use super::*;
    use crate::test_utils::tests::{MockProductRepository, MockUserRepository};

    #[tokio::test]
    async fn unknown_id_surfaces_not_found() -> Result<()> {
        let ctx = HandlerContext::new(
            Arc::new(MockProductRepository::new()),
            Arc::new(MockUserRepository::new()),
        );

        let err = GetProductByIdHandler::new()
            .handle(GetProductById { id: 42 }, &ctx)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Db(DbError::ProductNotFound(42))
        ));
        Ok(())
    }
}
