//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// User CRUD routes.
///
/// # Endpoints
///
/// - `GET    /user`            - List users ordered by id
/// - `POST   /user`            - Create a user
/// - `GET    /user/{user_id}`  - Fetch a user
/// - `PUT    /user/{user_id}`  - Rename a user
/// - `DELETE /user/{user_id}`  - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users_handler).post(create_user_handler))
        .route(
            "/user/{user_id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
}
