// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_same_as(&self, other: &User) -> bool {
        self.id == other.id
    }
}
