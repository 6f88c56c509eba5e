// src/application/commands/follows.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::RequestContext,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        follow::{FollowEdge, FollowRepository},
        user::{User, UserRepository, Username},
    },
};

pub struct FollowCommandService {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl FollowCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    /// Make the caller follow `username`. Following twice is a no-op.
    #[tracing::instrument(skip(self, ctx), fields(viewer = ?ctx.viewer_id()))]
    pub async fn follow_user(&self, ctx: &RequestContext, username: &str) -> ApplicationResult<User> {
        let (viewer, target) = self.resolve_pair(ctx, username).await?;
        let edge = FollowEdge::new(viewer.id, target.id)?;

        self.follow_repo.insert(edge).await?;
        tracing::debug!(follower = %viewer.id, followee = %target.id, "follow edge stored");

        Ok(target)
    }

    /// Remove the caller's edge to `username`, if any.
    #[tracing::instrument(skip(self, ctx), fields(viewer = ?ctx.viewer_id()))]
    pub async fn unfollow_user(
        &self,
        ctx: &RequestContext,
        username: &str,
    ) -> ApplicationResult<User> {
        let (viewer, target) = self.resolve_pair(ctx, username).await?;
        let edge = FollowEdge::new(viewer.id, target.id)?;

        self.follow_repo.delete(edge).await?;
        tracing::debug!(follower = %viewer.id, followee = %target.id, "follow edge removed");

        Ok(target)
    }

    async fn resolve_pair(
        &self,
        ctx: &RequestContext,
        username: &str,
    ) -> ApplicationResult<(User, User)> {
        let viewer = ctx
            .logged_in_user
            .clone()
            .ok_or_else(|| ApplicationError::unauthorized("login required"))?;

        let username = Username::new(username)?;
        let target = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user '{username}' not found")))?;

        Ok((viewer, target))
    }
}
