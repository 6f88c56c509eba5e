// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use follow_graph::application::{
    ports::TokenManagerPort, services::ApplicationServices,
};
use follow_graph::domain::{follow::FollowRepository, user::UserRepository};
use follow_graph::presentation::http::{routes::build_router, state::HttpState};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

use super::mocks::{DummyTokenManager, InMemoryGraph};

pub fn build_services(graph: Arc<InMemoryGraph>) -> Arc<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = graph.clone();
    let follow_repo: Arc<dyn FollowRepository> = graph;
    build_services_with(user_repo, follow_repo)
}

pub fn build_services_with(
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
) -> Arc<ApplicationServices> {
    let token_manager: Arc<TokenManagerPort> = Arc::new(DummyTokenManager);
    Arc::new(ApplicationServices::new(user_repo, follow_repo, token_manager))
}

pub fn make_test_router(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(
        HttpState::new(services),
        &["http://localhost:3000".to_string()],
    )
}

/// POST a GraphQL document and return the status plus the decoded body.
pub async fn post_graphql(
    app: &axum::Router,
    token: Option<&str>,
    query: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    let payload = json!({ "query": query }).to_string();
    let req = builder.body(Body::from(payload)).unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "non-JSON response ({status}): {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, value)
}

/// `extensions.code` of the first GraphQL error, if any.
pub fn first_error_code(body: &Value) -> Option<&str> {
    body["errors"][0]["extensions"]["code"].as_str()
}
