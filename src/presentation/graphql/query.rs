use super::{UserObject, UserPageObject, error::into_graphql, request_context, services};
use crate::application::queries::FollowListQuery;
use async_graphql::{Context, Object, Result};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The authenticated caller, or null for anonymous requests.
    async fn me(&self, ctx: &Context<'_>) -> Option<UserObject> {
        request_context(ctx).logged_in_user.map(UserObject)
    }

    async fn see_profile(&self, ctx: &Context<'_>, username: String) -> Result<UserObject> {
        services(ctx)?
            .user_queries
            .see_profile(&username)
            .await
            .map(UserObject)
            .map_err(into_graphql)
    }

    /// Users following `username`, most recent first.
    async fn see_followers(
        &self,
        ctx: &Context<'_>,
        username: String,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<UserPageObject> {
        let query = FollowListQuery {
            username,
            limit: limit.unwrap_or_default(),
            cursor,
        };
        services(ctx)?
            .user_queries
            .see_followers(query)
            .await
            .map(UserPageObject::from)
            .map_err(into_graphql)
    }

    /// Users `username` follows, most recent first.
    async fn see_following(
        &self,
        ctx: &Context<'_>,
        username: String,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<UserPageObject> {
        let query = FollowListQuery {
            username,
            limit: limit.unwrap_or_default(),
            cursor,
        };
        services(ctx)?
            .user_queries
            .see_following(query)
            .await
            .map(UserPageObject::from)
            .map_err(into_graphql)
    }
}
