pub mod user_fields;

pub use user_fields::{UserFieldResolver, UserFieldService};
