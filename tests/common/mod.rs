#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use user_service::application::services::UserService;
use user_service::domain::context::RequestContext;
use user_service::infrastructure::persistence::PgUserRepository;
use user_service::state::AppState;

pub async fn create_test_user(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO users (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_context(pool, RequestContext::background())
}

pub fn create_test_state_with_context(pool: PgPool, context: RequestContext) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let user_service = Arc::new(UserService::with_context(user_repo, context));

    AppState::new(pool, user_service)
}
