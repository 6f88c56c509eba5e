// tests/support/mocks/graph.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use follow_graph::domain::errors::{DomainError, DomainResult};
use follow_graph::domain::follow::{FollowCursor, FollowEdge, FollowPage, FollowRepository};
use follow_graph::domain::user::{User, UserId, UserRepository, Username};

use super::time::seconds_after_base;

#[derive(Default)]
struct GraphState {
    users: Vec<User>,
    edges: Vec<(FollowEdge, DateTime<Utc>)>,
    ticks: i64,
}

/// Users and follow edges held in memory. Each stored edge gets a timestamp
/// one second after the previous one so listings have a stable order.
#[derive(Default)]
pub struct InMemoryGraph {
    inner: Mutex<GraphState>,
}

#[derive(Clone, Copy)]
enum Side {
    Followers,
    Following,
}

impl InMemoryGraph {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            inner: Mutex::new(GraphState {
                users,
                ..Default::default()
            }),
        }
    }

    pub fn edge_count(&self) -> usize {
        self.inner.lock().unwrap().edges.len()
    }

    fn page(
        &self,
        side: Side,
        user: UserId,
        limit: u32,
        cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage> {
        let state = self.inner.lock().unwrap();
        let limit = limit.clamp(1, 100) as usize;

        let mut listed: Vec<(DateTime<Utc>, User)> = state
            .edges
            .iter()
            .filter_map(|(edge, at)| {
                let other = match side {
                    Side::Followers if edge.followee() == user => edge.follower(),
                    Side::Following if edge.follower() == user => edge.followee(),
                    _ => return None,
                };
                state
                    .users
                    .iter()
                    .find(|u| u.id == other)
                    .map(|u| (*at, u.clone()))
            })
            .filter(|(at, u)| match cursor.as_ref() {
                Some(c) => (*at, u.id) < (c.followed_at, c.user_id),
                None => true,
            })
            .collect();

        listed.sort_by(|a, b| (b.0, b.1.id).cmp(&(a.0, a.1.id)));
        listed.truncate(limit + 1);

        let next_cursor = if listed.len() > limit {
            listed.pop();
            listed
                .last()
                .map(|(at, u)| FollowCursor::new(*at, u.id))
        } else {
            None
        };

        Ok(FollowPage {
            users: listed.into_iter().map(|(_, u)| u).collect(),
            next_cursor,
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryGraph {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.inner.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl FollowRepository for InMemoryGraph {
    async fn count_following(&self, user: UserId) -> DomainResult<u64> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .edges
            .iter()
            .filter(|(edge, _)| edge.follower() == user)
            .count() as u64)
    }

    async fn count_followers(&self, user: UserId) -> DomainResult<u64> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .edges
            .iter()
            .filter(|(edge, _)| edge.followee() == user)
            .count() as u64)
    }

    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool> {
        let state = self.inner.lock().unwrap();
        Ok(state.edges.iter().any(|(stored, _)| *stored == edge))
    }

    async fn insert(&self, edge: FollowEdge) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        let known = |id: UserId| state.users.iter().any(|u| u.id == id);
        if !known(edge.follower()) || !known(edge.followee()) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        if state.edges.iter().any(|(stored, _)| *stored == edge) {
            return Ok(());
        }
        state.ticks += 1;
        let at = seconds_after_base(state.ticks);
        state.edges.push((edge, at));
        Ok(())
    }

    async fn delete(&self, edge: FollowEdge) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state.edges.retain(|(stored, _)| *stored != edge);
        Ok(())
    }

    async fn list_followers(
        &self,
        user: UserId,
        limit: u32,
        cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage> {
        self.page(Side::Followers, user, limit, cursor)
    }

    async fn list_following(
        &self,
        user: UserId,
        limit: u32,
        cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage> {
        self.page(Side::Following, user, limit, cursor)
    }
}

/// Follow store whose every call fails as if the database were down.
#[derive(Default)]
pub struct FailingGraph;

fn unreachable_store<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl FollowRepository for FailingGraph {
    async fn count_following(&self, _user: UserId) -> DomainResult<u64> {
        unreachable_store()
    }

    async fn count_followers(&self, _user: UserId) -> DomainResult<u64> {
        unreachable_store()
    }

    async fn exists(&self, _edge: FollowEdge) -> DomainResult<bool> {
        unreachable_store()
    }

    async fn insert(&self, _edge: FollowEdge) -> DomainResult<()> {
        unreachable_store()
    }

    async fn delete(&self, _edge: FollowEdge) -> DomainResult<()> {
        unreachable_store()
    }

    async fn list_followers(
        &self,
        _user: UserId,
        _limit: u32,
        _cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage> {
        unreachable_store()
    }

    async fn list_following(
        &self,
        _user: UserId,
        _limit: u32,
        _cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage> {
        unreachable_store()
    }
}
