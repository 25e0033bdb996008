use catalog_types::Result;

use crate::{
    app_bus::HandlerContext,
    cqrs::{CommandHandler, commands::UpdateProduct},
};

pub struct UpdateProductCommandHandler {}

impl UpdateProductCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateProduct> for UpdateProductCommandHandler {
    async fn handle(&self, command: UpdateProduct, ctx: &HandlerContext) -> Result<()> {
        ctx.products
            .update(command.id, command.name, command.price)
            .await
    }
}
