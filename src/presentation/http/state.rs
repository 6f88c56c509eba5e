// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::graphql::{AppSchema, build_schema};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub schema: AppSchema,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        let schema = build_schema(Arc::clone(&services));
        Self { services, schema }
    }
}
