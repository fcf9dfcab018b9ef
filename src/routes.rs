//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`            - Health check (database)
//! - `/user`, `/user/{id}`     - User CRUD API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/user/` and `/user`
/// reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::user_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::UserService;
    use crate::domain::entities::User;
    use crate::domain::repositories::{MockUserRepository, RepositoryError};
    use axum::ServiceExt;
    use axum::extract::Request;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;
    use std::time::Duration;

    /// Serves the full application router over a mocked repository.
    ///
    /// The pool points at nothing; `/health` fails fast and reports degraded.
    fn make_server(mock_repo: MockUserRepository) -> TestServer {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://localhost:1/unused")
            .unwrap();
        let state = AppState::new(
            Arc::new(pool),
            Arc::new(UserService::new(Arc::new(mock_repo))),
        );
        let app = app_router(state);

        TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
    }

    #[tokio::test]
    async fn test_trailing_slash_reaches_list() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|_| Ok(vec![User::new(1, "andy".to_string())]));

        let server = make_server(mock_repo);
        let response = server.get("/user/").await;

        response.assert_status_ok();
        response.assert_json(&json!([{ "user_id": 1, "name": "andy" }]));
    }

    #[tokio::test]
    async fn test_trailing_slash_on_user_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|_, id| *id == 5)
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let server = make_server(mock_repo);
        let response = server.get("/user/5/").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_health_is_routed() {
        let server = make_server(MockUserRepository::new());

        let response = server.get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body = response.json::<Value>();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"]["database"]["status"], "error");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let server = make_server(MockUserRepository::new());

        server.get("/users").await.assert_status_not_found();
    }
}
