// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_follow;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_follow::PostgresFollowRepository;
pub use postgres_user::PostgresUserRepository;
