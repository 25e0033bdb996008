use catalog_types::Result;

use crate::{
    app_bus::HandlerContext,
    cqrs::{CommandHandler, commands::DeleteProduct},
};

pub struct DeleteProductCommandHandler {}

impl DeleteProductCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteProduct> for DeleteProductCommandHandler {
    async fn handle(&self, command: DeleteProduct, ctx: &HandlerContext) -> Result<()> {
        ctx.products.delete(command.id).await
    }
}
