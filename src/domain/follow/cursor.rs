use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Keyset position inside a follower/following listing: the edge timestamp
/// plus the listed user's id as tie-breaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowCursor {
    pub followed_at: DateTime<Utc>,
    pub user_id: UserId,
}

impl FollowCursor {
    pub fn new(followed_at: DateTime<Utc>, user_id: UserId) -> Self {
        Self {
            followed_at,
            user_id,
        }
    }

    pub fn encode(&self) -> String {
        let raw = format!(
            "{}|{}",
            self.followed_at.to_rfc3339(),
            i64::from(self.user_id)
        );
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (followed_at, user_id) = raw.split_once('|').ok_or_else(invalid)?;

        let followed_at = DateTime::parse_from_rfc3339(followed_at)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let user_id = user_id.parse::<UserId>().map_err(|_| invalid())?;

        Ok(Self::new(followed_at, user_id))
    }
}
