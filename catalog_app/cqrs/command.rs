use async_trait::async_trait;
use catalog_types::errors::ApplicationError;

use crate::app_bus::HandlerContext;

/// A marker trait for Command structs.
/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync {}

/// A trait for handlers that execute Commands.
/// It receives the command and the handler context with the store
/// capabilities. Each handler invokes exactly one store method.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(&self, cmd: C, ctx: &HandlerContext) -> Result<(), ApplicationError>;
}
