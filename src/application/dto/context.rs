// src/application/dto/context.rs
use crate::domain::user::{User, UserId};

/// Per-request view of who is asking. Built once by the transport layer and
/// dropped with the request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub logged_in_user: Option<User>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            logged_in_user: Some(user),
        }
    }

    pub fn viewer_id(&self) -> Option<UserId> {
        self.logged_in_user.as_ref().map(|user| user.id)
    }
}
