// src/presentation/http/extractors.rs
use crate::{
    application::{dto::RequestContext, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::{HttpError, IntoHttpResult};

/// Request context for a caller that may or may not present a bearer token.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub RequestContext);

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts.headers.typed_get::<Authorization<Bearer>>();
        let token = header.as_ref().map(|header| header.token());

        let ctx = app_state
            .services
            .request_context(token)
            .await
            .into_http()?;

        Ok(Self(ctx))
    }
}
