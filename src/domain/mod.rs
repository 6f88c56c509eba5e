pub mod errors;
pub mod follow;
pub mod user;
