use std::sync::Arc;

use catalog_types::errors::ApplicationError;

use crate::cqrs::{Command, CommandHandler, Query, QueryHandler};
use crate::repository::{ProductRepository, UserRepository};

/// Store capabilities handed to every handler.
#[derive(Clone)]
pub struct HandlerContext {
    pub products: Arc<dyn ProductRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl HandlerContext {
    pub fn new(products: Arc<dyn ProductRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { products, users }
    }
}

/// Entry point for executing commands and queries. Both the HTTP layer
/// and the queue relay dispatch through the bus, so neither embeds any
/// business rules of its own.
pub struct AppBus {
    ctx: HandlerContext,
}

impl AppBus {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        handler.handle(cmd, &self.ctx).await
    }

    /// Executes a query.
    /// A query reads system state and returns data. It never modifies it.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        handler.handle(query, &self.ctx).await
    }
}
