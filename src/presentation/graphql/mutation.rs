use super::{UserObject, error::into_graphql, request_context, services};
use async_graphql::{Context, Object, Result};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn follow_user(&self, ctx: &Context<'_>, username: String) -> Result<UserObject> {
        let request = request_context(ctx);
        services(ctx)?
            .follow_commands
            .follow_user(&request, &username)
            .await
            .map(UserObject)
            .map_err(into_graphql)
    }

    async fn unfollow_user(&self, ctx: &Context<'_>, username: String) -> Result<UserObject> {
        let request = request_context(ctx);
        services(ctx)?
            .follow_commands
            .unfollow_user(&request, &username)
            .await
            .map(UserObject)
            .map_err(into_graphql)
    }
}
