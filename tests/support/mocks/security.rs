// tests/support/mocks/security.rs
use async_trait::async_trait;
use follow_graph::application::{
    ApplicationResult, error::ApplicationError, ports::security::TokenManager,
};
use follow_graph::domain::user::{User, UserId};

pub const EXPIRED_TOKEN: &str = "expired-token";

const TOKEN_PREFIX: &str = "token-";

/// Bearer token the dummy manager accepts for user `id`.
pub fn token_for(id: i64) -> String {
    format!("{TOKEN_PREFIX}{id}")
}

/// Accepts `token-<id>` for any positive id; everything else is rejected.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, user: &User) -> ApplicationResult<String> {
        Ok(token_for(i64::from(user.id)))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<UserId> {
        if token == EXPIRED_TOKEN {
            return Err(ApplicationError::unauthorized("expired token"));
        }
        token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|raw| raw.parse::<UserId>().ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}
