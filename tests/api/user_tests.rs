//! User API Tests
//!
//! End-to-end tests for the users resource, driven through the full router
//! with an in-memory repository (or a dead database pool for the backend
//! failure case).

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use user_api::domain::UserRepository;

use crate::common::{body_json, unique_email, unique_id, user_body, InMemoryUserRepository, TestApp};

/// Listing with no users persisted returns an empty array with 200.
#[tokio::test]
async fn listing_with_no_users_returns_empty_array() {
    let app = TestApp::new();

    let response = app.get("/api/users").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

/// Listing returns every persisted user in id order, and re-listing
/// without mutation returns an identical sequence.
#[tokio::test]
async fn listing_returns_users_in_order_and_is_idempotent() {
    let app = TestApp::new();

    // Insert out of order to exercise the ordering
    app.post_json("/api/users", &user_body("2", "Bo", "Kim", "bo.kim@example.com"))
        .await;
    app.post_json("/api/users", &user_body("1", "Ann", "Lee", "ann.lee@example.com"))
        .await;

    let response = app.get("/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let first = body_json(response).await;
    assert_eq!(
        first,
        json!([
            {"id": "1", "firstName": "Ann", "lastName": "Lee", "email": "ann.lee@example.com"},
            {"id": "2", "firstName": "Bo", "lastName": "Kim", "email": "bo.kim@example.com"},
        ])
    );

    let second = body_json(app.get("/api/users").await).await;
    assert_eq!(first, second);
}

/// Saving an unused id creates exactly one record; saving the same id with
/// changed fields updates it in place.
#[tokio::test]
async fn save_is_an_upsert_keyed_on_id() {
    let app = TestApp::new();
    let id = unique_id();

    let response = app
        .post_json("/api/users", &user_body(&id, "Ann", "Lee", "ann.lee@example.com"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(app.get("/api/users").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Same id, changed fields
    let email = unique_email();
    let response = app
        .post_json("/api/users", &user_body(&id, "Anna", "Lee", &email))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(app.get("/api/users").await).await;
    let users = listed.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["firstName"], "Anna");
    assert_eq!(users[0]["email"], email.as_str());

    let fetched = body_json(app.get(&format!("/api/users/{}", id)).await).await;
    assert_eq!(fetched["firstName"], "Anna");
}

/// Deleting a user makes a subsequent find-by-id return 404.
#[tokio::test]
async fn deleted_user_is_absent_on_lookup() {
    let app = TestApp::new();

    let body = user_body("1", "Ann", "Lee", "ann.lee@example.com");
    app.post_json("/api/users", &body).await;

    let response = app.delete_json("/api/users", &body).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get("/api/users/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a record that does not exist is reported as not-found.
#[tokio::test]
async fn deleting_a_missing_user_returns_404() {
    let app = TestApp::new();

    let response = app
        .delete_json(
            "/api/users",
            &user_body("missing", "No", "Body", "nobody@example.com"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// find-by-email with no matching record resolves as absent at the
/// repository (no error) and as 404 at the HTTP surface.
#[tokio::test]
async fn find_by_email_with_no_match_is_absent_not_an_error() {
    let repo = InMemoryUserRepository::new();
    let found = repo.find_by_email("nobody@example.com").await;
    assert!(matches!(found, Ok(None)));

    let app = TestApp::new();
    let response = app.get("/api/users/email/nobody@example.com").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// find-by-email returns the matching user.
#[tokio::test]
async fn find_by_email_returns_matching_user() {
    let app = TestApp::new();

    app.post_json("/api/users", &user_body("1", "Ann", "Lee", "ann.lee@example.com"))
        .await;

    let response = app.get("/api/users/email/ann.lee@example.com").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], "1");
}

/// A malformed request body is rejected with 400 before reaching the store.
#[tokio::test]
async fn save_rejects_malformed_email() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/users", &user_body("1", "Ann", "Lee", "not-an-email"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Listing with the database unreachable surfaces a server error status,
/// distinguishing backend failure from an empty result.
#[tokio::test]
async fn listing_with_unreachable_database_returns_503() {
    let app = TestApp::with_unreachable_database();

    let response = app.get("/api/users").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["code"], 503);
}
