// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::FollowCommandService,
        dto::RequestContext,
        error::ApplicationResult,
        ports::TokenManagerPort,
        queries::UserQueryService,
        resolvers::{UserFieldResolver, UserFieldService},
    },
    domain::{follow::FollowRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub user_fields: Arc<dyn UserFieldResolver>,
    pub user_queries: Arc<UserQueryService>,
    pub follow_commands: Arc<FollowCommandService>,
    user_repo: Arc<dyn UserRepository>,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        token_manager: Arc<TokenManagerPort>,
    ) -> Self {
        let user_fields: Arc<dyn UserFieldResolver> =
            Arc::new(UserFieldService::new(Arc::clone(&follow_repo)));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&follow_repo),
        ));
        let follow_commands = Arc::new(FollowCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&follow_repo),
        ));

        Self {
            user_fields,
            user_queries,
            follow_commands,
            user_repo,
            token_manager,
        }
    }

    /// Turn an optional bearer token into the request context.
    ///
    /// No token means an anonymous caller. A token that fails verification is
    /// an error; a valid token whose subject has since disappeared degrades to
    /// an anonymous caller.
    pub async fn request_context(&self, token: Option<&str>) -> ApplicationResult<RequestContext> {
        let Some(token) = token else {
            return Ok(RequestContext::anonymous());
        };

        let user_id = self.token_manager.authenticate(token).await?;
        match self.user_repo.find_by_id(user_id).await? {
            Some(user) => Ok(RequestContext::authenticated(user)),
            None => {
                tracing::warn!(user_id = %user_id, "token subject no longer exists");
                Ok(RequestContext::anonymous())
            }
        }
    }
}
