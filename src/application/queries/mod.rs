pub mod users;

pub use users::{FollowListQuery, UserQueryService};
