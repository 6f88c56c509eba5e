// src/infrastructure/repositories/postgres_follow.rs
use super::{map_sqlx, postgres_user::UserRow};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::follow::{FollowCursor, FollowEdge, FollowPage, FollowRepository};
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

/// Which side of the edge the listing is anchored on.
#[derive(Debug, Clone, Copy)]
enum Direction {
    /// users whose edge points at the subject
    Followers,
    /// users the subject's edges point at
    Following,
}

impl Direction {
    /// (column matched against the subject, column joined to `users`)
    fn columns(self) -> (&'static str, &'static str) {
        match self {
            Direction::Followers => ("followee_id", "follower_id"),
            Direction::Following => ("follower_id", "followee_id"),
        }
    }
}

#[derive(Debug, FromRow)]
struct ListedUserRow {
    #[sqlx(flatten)]
    user: UserRow,
    followed_at: DateTime<Utc>,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count_by(&self, column: &'static str, user: UserId) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM follows WHERE ");
        builder.push(column);
        builder.push(" = ");
        builder.push_bind(i64::from(user));

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn list(
        &self,
        direction: Direction,
        user: UserId,
        limit: u32,
        cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = (limit as i64) + 1;
        let (anchor, listed) = direction.columns();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT u.id, u.username, u.created_at, f.created_at AS followed_at \
             FROM follows f JOIN users u ON u.id = f.",
        );
        builder.push(listed);
        builder.push(" WHERE f.");
        builder.push(anchor);
        builder.push(" = ");
        builder.push_bind(i64::from(user));

        if let Some(cursor) = cursor.as_ref() {
            builder.push(" AND (f.created_at, u.id) < (");
            builder.push_bind(cursor.followed_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.user_id));
            builder.push(")");
        }

        builder.push(" ORDER BY f.created_at DESC, u.id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ListedUserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_page(rows, limit)
    }
}

/// Turn `limit + 1` fetched rows into a page; the extra row only signals
/// that another page exists.
fn into_page(rows: Vec<ListedUserRow>, limit: u32) -> DomainResult<FollowPage> {
    let mut listed = rows
        .into_iter()
        .map(|row| Ok::<_, DomainError>((User::try_from(row.user)?, row.followed_at)))
        .collect::<Result<Vec<_>, _>>()?;

    let next_cursor = if listed.len() > limit as usize {
        let _ = listed.pop();
        listed
            .last()
            .map(|(user, followed_at)| FollowCursor::new(*followed_at, user.id))
    } else {
        None
    };

    Ok(FollowPage {
        users: listed.into_iter().map(|(user, _)| user).collect(),
        next_cursor,
    })
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn count_following(&self, user: UserId) -> DomainResult<u64> {
        self.count_by("follower_id", user).await
    }

    async fn count_followers(&self, user: UserId) -> DomainResult<u64> {
        self.count_by("followee_id", user).await
    }

    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)",
        )
        .bind(i64::from(edge.follower()))
        .bind(i64::from(edge.followee()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, edge: FollowEdge) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, followee_id) VALUES ($1, $2)
             ON CONFLICT (follower_id, followee_id) DO NOTHING",
        )
        .bind(i64::from(edge.follower()))
        .bind(i64::from(edge.followee()))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn delete(&self, edge: FollowEdge) -> DomainResult<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
            .bind(i64::from(edge.follower()))
            .bind(i64::from(edge.followee()))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }

    async fn list_followers(
        &self,
        user: UserId,
        limit: u32,
        cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage> {
        self.list(Direction::Followers, user, limit, cursor).await
    }

    async fn list_following(
        &self,
        user: UserId,
        limit: u32,
        cursor: Option<FollowCursor>,
    ) -> DomainResult<FollowPage> {
        self.list(Direction::Following, user, limit, cursor).await
    }
}
