use catalog_types::Result;

use crate::{
    app_bus::HandlerContext,
    cqrs::{CommandHandler, commands::CreateUser},
};

pub struct CreateUserCommandHandler {}

impl CreateUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateUser> for CreateUserCommandHandler {
    async fn handle(&self, command: CreateUser, ctx: &HandlerContext) -> Result<()> {
        ctx.users.create(command.name, command.lastname).await
    }
}
