pub mod follows;

pub use follows::FollowCommandService;
