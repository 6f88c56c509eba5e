// src/presentation/graphql/user.rs
use super::{error::into_graphql, request_context, services};
use crate::{application::dto::CursorPage, domain::user::User};
use async_graphql::{Context, ID, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};

/// GraphQL `User`. Stored columns are read straight off the entity; the
/// derived fields go through `UserFieldResolver`.
pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn username(&self) -> &str {
        self.0.username.as_str()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn total_following(&self, ctx: &Context<'_>) -> Result<u64> {
        services(ctx)?
            .user_fields
            .total_following(&self.0)
            .await
            .map_err(into_graphql)
    }

    async fn total_followers(&self, ctx: &Context<'_>) -> Result<u64> {
        services(ctx)?
            .user_fields
            .total_followers(&self.0)
            .await
            .map_err(into_graphql)
    }

    async fn is_me(&self, ctx: &Context<'_>) -> Result<bool> {
        let request = request_context(ctx);
        Ok(services(ctx)?.user_fields.is_me(&self.0, &request))
    }

    async fn is_following(&self, ctx: &Context<'_>) -> Result<bool> {
        let request = request_context(ctx);
        services(ctx)?
            .user_fields
            .is_following(&self.0, &request)
            .await
            .map_err(into_graphql)
    }
}

#[derive(SimpleObject)]
#[graphql(name = "UserPage")]
pub struct UserPageObject {
    pub items: Vec<UserObject>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<CursorPage<User>> for UserPageObject {
    fn from(page: CursorPage<User>) -> Self {
        Self {
            items: page.items.into_iter().map(UserObject).collect(),
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}
