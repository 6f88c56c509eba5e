// src/application/ports/security.rs
use crate::application::ApplicationResult;
use crate::domain::user::{User, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    /// Mint a bearer token for `user`.
    async fn issue(&self, user: &User) -> ApplicationResult<String>;

    /// Verify a bearer token and return the subject it was issued to.
    async fn authenticate(&self, token: &str) -> ApplicationResult<UserId>;
}
