// src/presentation/http/controllers/graphql.rs
use crate::presentation::http::{extractors::MaybeAuthenticated, state::HttpState};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub async fn execute(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(ctx): MaybeAuthenticated,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner().data(ctx);
    state.schema.execute(request).await.into()
}

pub async fn playground() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
