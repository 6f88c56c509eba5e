// src/application/resolvers/user_fields.rs
use std::sync::Arc;

use crate::{
    application::{dto::RequestContext, error::ApplicationResult},
    domain::{
        follow::{FollowEdge, FollowRepository},
        user::User,
    },
};
use async_trait::async_trait;

/// Derived, non-persisted fields of a `User`.
///
/// Every method is a function of `(user, context)` only, issues at most one
/// read against the follow store and can run concurrently with the others.
/// Store failures are returned as-is; nothing here retries.
#[async_trait]
pub trait UserFieldResolver: Send + Sync {
    /// How many users `user` follows.
    async fn total_following(&self, user: &User) -> ApplicationResult<u64>;

    /// How many users follow `user`.
    async fn total_followers(&self, user: &User) -> ApplicationResult<u64>;

    /// Whether `user` is the caller. Anonymous callers are never "me".
    fn is_me(&self, user: &User, ctx: &RequestContext) -> bool;

    /// Whether the caller follows `user`. Anonymous callers follow nobody.
    async fn is_following(&self, user: &User, ctx: &RequestContext) -> ApplicationResult<bool>;
}

pub struct UserFieldService {
    follow_repo: Arc<dyn FollowRepository>,
}

impl UserFieldService {
    pub fn new(follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self { follow_repo }
    }
}

#[async_trait]
impl UserFieldResolver for UserFieldService {
    async fn total_following(&self, user: &User) -> ApplicationResult<u64> {
        Ok(self.follow_repo.count_following(user.id).await?)
    }

    async fn total_followers(&self, user: &User) -> ApplicationResult<u64> {
        Ok(self.follow_repo.count_followers(user.id).await?)
    }

    fn is_me(&self, user: &User, ctx: &RequestContext) -> bool {
        match ctx.logged_in_user.as_ref() {
            Some(viewer) => viewer.is_same_as(user),
            None => false,
        }
    }

    async fn is_following(&self, user: &User, ctx: &RequestContext) -> ApplicationResult<bool> {
        let Some(viewer) = ctx.logged_in_user.as_ref() else {
            return Ok(false);
        };

        // no self-edges exist, so there is nothing to look up
        if viewer.is_same_as(user) {
            return Ok(false);
        }

        let edge = FollowEdge::new(viewer.id, user.id)?;
        Ok(self.follow_repo.exists(edge).await?)
    }
}
