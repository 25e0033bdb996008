use catalog_types::Result;

use crate::{
    app_bus::HandlerContext,
    cqrs::{CommandHandler, commands::DeleteUser},
};

pub struct DeleteUserCommandHandler {}

impl DeleteUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteUser> for DeleteUserCommandHandler {
    async fn handle(&self, command: DeleteUser, ctx: &HandlerContext) -> Result<()> {
        ctx.users.delete(command.id).await
    }
}
