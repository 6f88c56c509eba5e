// tests/support/builders.rs
use follow_graph::domain::user::{User, UserId, Username};

use super::mocks::time::seconds_after_base;

pub fn user(id: i64, username: &str) -> User {
    User {
        id: UserId::new(id).expect("invalid user id"),
        username: Username::from_stored(username.to_string()),
        created_at: seconds_after_base(-id),
    }
}

/// alice(1), bob(2), carol(3), dave(4)
pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "alice"),
        user(2, "bob"),
        user(3, "carol"),
        user(4, "dave"),
    ]
}
