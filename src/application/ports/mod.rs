// src/application/ports/mod.rs
pub mod security;

pub type TokenManagerPort = dyn security::TokenManager;
