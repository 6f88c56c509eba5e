// src/presentation/graphql/mod.rs
pub mod error;
pub mod mutation;
pub mod query;
pub mod user;

use std::sync::Arc;

use crate::application::{dto::RequestContext, services::ApplicationServices};
use async_graphql::{Context, EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use user::{UserObject, UserPageObject};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(services: Arc<ApplicationServices>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}

pub(crate) fn services<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<ApplicationServices>> {
    ctx.data::<Arc<ApplicationServices>>()
}

/// Requests executed without a context (e.g. straight through the schema)
/// are anonymous.
pub(crate) fn request_context<'a>(ctx: &Context<'a>) -> RequestContext {
    ctx.data_opt::<RequestContext>().cloned().unwrap_or_default()
}
