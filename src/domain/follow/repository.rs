// src/domain/follow/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::follow::{cursor::FollowCursor, entity::FollowEdge};
use crate::domain::user::{User, UserId};
use async_trait::async_trait;

/// One page of a follower/following listing.
#[derive(Debug, Clone, Default)]
pub struct FollowPage {
    pub users: Vec<User>,
    pub next_cursor: Option<FollowCursor>,
}

/// Read and write access to the follow graph.
///
/// Counts and the existence check are single round-trips; implementations
/// must not load the edge lists to answer them.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Number of users `user` follows.
    async fn count_following(&self, user: UserId) -> DomainResult<u64>;

    /// Number of users following `user`.
    async fn count_followers(&self, user: UserId) -> DomainResult<u64>;

    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool>;

    /// Idempotent: inserting an existing edge is not an error.
    async fn insert(&self, edge: FollowEdge) -> DomainResult<()>;

    /// Idempotent: deleting a missing edge is not an error.
    async fn delete(&self, edge: FollowEdge) -> DomainResult<()>;

    async fn list_followers(
        &self,
        user: UserId,
        limit: u32,
        cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage>;

    async fn list_following(
        &self,
        user: UserId,
        limit: u32,
        cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage>;
}
