use catalog_types::Result;

use crate::{
    app_bus::HandlerContext,
    cqrs::{CommandHandler, commands::CreateProduct},
};

pub struct CreateProductCommandHandler {}

impl CreateProductCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateProduct> for CreateProductCommandHandler {
    async fn handle(&self, command: CreateProduct, ctx: &HandlerContext) -> Result<()> {
        ctx.products.create(command.name, command.price).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog_types::Result;

    use super::*;
    use crate::repository::ProductRepository;
    use crate::test_utils::tests::{MockProductRepository, MockUserRepository};

    #[tokio::test]
    async fn creates_a_product_with_store_assigned_id() -> Result<()> {
        let products = Arc::new(MockProductRepository::new());
        let ctx = HandlerContext::new(products.clone(), Arc::new(MockUserRepository::new()));

        let command = CreateProduct {
            name: "Widget".to_string(),
            price: 9.99,
        };
        CreateProductCommandHandler::new()
            .handle(command, &ctx)
            .await?;

        let all = products.get_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].name, "Widget");
        Ok(())
    }
}
