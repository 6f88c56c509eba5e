// src/application/queries/users.rs
use crate::{
    application::{
        dto::CursorPage,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        follow::{FollowCursor, FollowPage, FollowRepository},
        user::{User, UserRepository, Username},
    },
};
use std::sync::Arc;

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

#[derive(Debug, Clone, Default)]
pub struct FollowListQuery {
    pub username: String,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn see_profile(&self, username: &str) -> ApplicationResult<User> {
        let username = Username::new(username)?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user '{username}' not found")))
    }

    #[tracing::instrument(skip(self))]
    pub async fn see_followers(&self, query: FollowListQuery) -> ApplicationResult<CursorPage<User>> {
        let subject = self.see_profile(&query.username).await?;
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let page = self
            .follow_repo
            .list_followers(subject.id, limit, cursor)
            .await?;
        Ok(into_page(page))
    }

    #[tracing::instrument(skip(self))]
    pub async fn see_following(&self, query: FollowListQuery) -> ApplicationResult<CursorPage<User>> {
        let subject = self.see_profile(&query.username).await?;
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let page = self
            .follow_repo
            .list_following(subject.id, limit, cursor)
            .await?;
        Ok(into_page(page))
    }
}

fn into_page(page: FollowPage) -> CursorPage<User> {
    CursorPage::new(page.users, page.next_cursor.map(|cursor| cursor.encode()))
}

fn normalize_limit(limit: u32) -> u32 {
    const DEFAULT_LIMIT: u32 = 20;
    const MAX_LIMIT: u32 = 100;

    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<FollowCursor>> {
    match token {
        Some(value) => FollowCursor::decode(value)
            .map(Some)
            .map_err(ApplicationError::from),
        None => Ok(None),
    }
}
