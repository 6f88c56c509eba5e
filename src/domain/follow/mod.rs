// src/domain/follow/mod.rs
pub mod cursor;
pub mod entity;
pub mod repository;

pub use cursor::FollowCursor;
pub use entity::FollowEdge;
pub use repository::{FollowPage, FollowRepository};
