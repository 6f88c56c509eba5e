// src/domain/follow/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

/// Directed edge: `follower` follows `followee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    follower: UserId,
    followee: UserId,
}

impl FollowEdge {
    pub fn new(follower: UserId, followee: UserId) -> DomainResult<Self> {
        if follower == followee {
            return Err(DomainError::Validation("users cannot follow themselves".into()));
        }
        Ok(Self { follower, followee })
    }

    pub fn follower(&self) -> UserId {
        self.follower
    }

    pub fn followee(&self) -> UserId {
        self.followee
    }
}
