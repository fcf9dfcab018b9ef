//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::UserService;

/// Application state shared across all HTTP handlers.
///
/// Cloning is cheap: every field is reference counted. The pool is the only
/// shared resource and is safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(db: Arc<PgPool>, user_service: Arc<UserService>) -> Self {
        Self { db, user_service }
    }
}
