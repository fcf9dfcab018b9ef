mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use user_service::api::dto::user::UserResponse;
use user_service::api::routes::user_routes;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new().merge(user_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

// ─── CREATE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_then_get_round_trip(pool: PgPool) {
    let server = make_server(pool);

    let response = server.post("/user").json(&json!({ "name": "andy" })).await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<UserResponse>();
    assert_eq!(created.name, "andy");

    let response = server.get(&format!("/user/{}", created.user_id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<UserResponse>(), created);
}

#[sqlx::test]
async fn test_create_bad_request(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/user")
        .json(&json!({ "name": "the name exceeds twenty characters and failed the validation" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(
        body["message"],
        "Please provide name within 20 alphabetical characters"
    );
    assert!(body["error"].as_str().unwrap().contains("length"));
    assert_eq!(common::count_users(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_missing_name(pool: PgPool) {
    let server = make_server(pool);

    let response = server.post("/user").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["error"]
            .as_str()
            .unwrap()
            .contains("required")
    );
}

// ─── GET ──────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_user(pool: PgPool) {
    let id = common::create_test_user(&pool, "testName").await;
    let server = make_server(pool);

    let response = server.get(&format!("/user/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "user_id": id, "name": "testName" }));
}

#[sqlx::test]
async fn test_get_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/user/123").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["message"],
        "The inputted id does not exist"
    );
}

#[sqlx::test]
async fn test_get_bad_request(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/user/bad-request-test").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Please provide id in the correct format"
    );
}

// ─── UPDATE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_preserves_identity(pool: PgPool) {
    let id = common::create_test_user(&pool, "testOriginalName").await;
    let server = make_server(pool);

    let response = server
        .put(&format!("/user/{id}"))
        .json(&json!({ "name": "testUpdatedName" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "user_id": id, "name": "testUpdatedName" }));

    let response = server.get(&format!("/user/{id}")).await;
    response.assert_json(&json!({ "user_id": id, "name": "testUpdatedName" }));
}

#[sqlx::test]
async fn test_update_bad_request_leaves_row_untouched(pool: PgPool) {
    let id = common::create_test_user(&pool, "testName").await;
    let server = make_server(pool);

    let response = server
        .put(&format!("/user/{id}"))
        .json(&json!({ "name": "the name of this user is too long that fails the validation" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.get(&format!("/user/{id}")).await;
    response.assert_json(&json!({ "user_id": id, "name": "testName" }));
}

#[sqlx::test]
async fn test_update_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .put("/user/123")
        .json(&json!({ "name": "ghost" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_is_terminal(pool: PgPool) {
    let id = common::create_test_user(&pool, "testName").await;
    let server = make_server(pool);

    let response = server.delete(&format!("/user/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Deleted successfully" }));

    server
        .get(&format!("/user/{id}"))
        .await
        .assert_status_not_found();
    server
        .delete(&format!("/user/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_bad_request(pool: PgPool) {
    let server = make_server(pool);

    let response = server.delete("/user/99999999999").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── LIST ─────────────────────────────────────────────────────────────────────

/// An empty table answers 404 rather than `[]`.
#[sqlx::test]
async fn test_list_empty_is_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/user").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["message"],
        "Users information unavailable"
    );
}

#[sqlx::test]
async fn test_list_sorted_and_mapped(pool: PgPool) {
    let server = make_server(pool);

    for user_name in ["carol", "andy", "bob"] {
        server
            .post("/user")
            .json(&json!({ "name": user_name }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/user").await;

    response.assert_status_ok();
    let users = response.json::<Vec<Value>>();
    assert_eq!(users.len(), 3);

    let ids: Vec<i64> = users.iter().map(|u| u["user_id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    // Mapped shape only: `user_id` and `name`, never the raw `id` column.
    for user in &users {
        let obj = user.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("user_id"));
        assert!(obj.contains_key("name"));
    }
}
