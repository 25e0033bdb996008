use catalog_types::Result;
use catalog_types::common::User;

use crate::{
    app_bus::HandlerContext,
    cqrs::{QueryHandler, queries::GetAllUsers},
};

pub struct GetAllUsersHandler {}

impl GetAllUsersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl QueryHandler<GetAllUsers> for GetAllUsersHandler {
    async fn handle(&self, _query: GetAllUsers, ctx: &HandlerContext) -> Result<Vec<User>> {
        ctx.users.get_all().await
    }
}
