// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod graph;
pub mod security;
pub mod time;

pub use graph::{FailingGraph, InMemoryGraph};
pub use security::{DummyTokenManager, EXPIRED_TOKEN, token_for};
pub use time::fixed_now;
