use catalog_types::Result;

use crate::{
    app_bus::HandlerContext,
    cqrs::{CommandHandler, commands::UpdateUser},
};

pub struct UpdateUserCommandHandler {}

impl UpdateUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateUser> for UpdateUserCommandHandler {
    async fn handle(&self, command: UpdateUser, ctx: &HandlerContext) -> Result<()> {
        ctx.users
            .update(command.id, command.name, command.lastname)
            .await
    }
}
