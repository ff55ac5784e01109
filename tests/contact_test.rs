mod common;

use axum::http::StatusCode;
use portfolio_api::store::DocumentStore;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_valid_message_is_stored() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/contact")
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "I would like to talk about your projects."
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"].as_str().unwrap(), "ok");
    assert!(!body["id"].as_str().unwrap().is_empty());

    let stored = app.store.get_documents("message").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].get_str("name").unwrap(), "Ada Lovelace");
    assert_eq!(stored[0].get_str("email").unwrap(), "ada@example.com");
    assert!(stored[0].get_datetime("created_at").is_ok());
}

#[tokio::test]
async fn test_message_length_bounds_are_inclusive() {
    let app = TestApp::new();

    for message in ["12345", &"x".repeat(2000)] {
        let response = app
            .server
            .post("/contact")
            .json(&json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": message
            }))
            .await;
        response.assert_status(StatusCode::OK);
    }

    assert_eq!(app.store.get_documents("message").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_too_short_message_rejected_without_write() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/contact")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "1234"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.get_documents("message").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_too_long_message_rejected_without_write() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/contact")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "x".repeat(2001)
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.get_documents("message").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_email_rejected_without_write() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/contact")
        .json(&json!({
            "name": "Ada",
            "email": "not-an-email",
            "message": "Hello from the contact form"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.get_documents("message").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/contact")
        .json(&json!({
            "email": "ada@example.com",
            "message": "Hello from the contact form"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.get_documents("message").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_storage_failure_surfaces_as_server_error() {
    let server = TestApp::unreachable();

    let response = server
        .post("/contact")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello from the contact form"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"].as_str().unwrap(), "Storage backend unavailable");
}
