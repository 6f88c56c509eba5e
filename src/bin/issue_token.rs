// src/bin/issue_token.rs
//! Mint a bearer token for an existing user: `issue_token <username>`.
use anyhow::{Context, Result, bail};
use follow_graph::{
    application::ports::security::TokenManager,
    config::AppConfig,
    domain::user::{UserRepository, Username},
    infrastructure::{
        database, repositories::PostgresUserRepository, security::token::BiscuitTokenManager,
    },
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let Some(username) = env::args().nth(1) else {
        bail!("usage: issue_token <username>");
    };
    let username = Username::new(username)?;

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), 1).await?;
    let users = PostgresUserRepository::new(pool.clone());

    let user = users
        .find_by_username(&username)
        .await?
        .with_context(|| format!("user '{username}' not found"))?;

    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let token = manager.issue(&user).await?;
    println!("{token}");

    pool.close().await;
    Ok(())
}
