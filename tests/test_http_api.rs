mod helpers;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use helpers::*;
use notification_service::api::error::ErrorResponse;
use notification_service::api::notifications::NotificationResponse;
use notification_service::api::router::build_router;
use notification_service::api::AppState;
use notification_service::models::NotificationType;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = setup_test_db().await;
    build_router(AppState::new(db, sample_organisation()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> NotificationResponse {
    let (status, bytes) = send(
        app,
        json_request(Method::POST, "/api/v1/notifications", body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_notification_returns_created() {
    let app = test_app().await;

    let created = create(
        &app,
        json!({
            "title": "New Message",
            "message": "You have a new message from John Doe",
            "recipientId": 123,
            "type": "EMAIL"
        }),
    )
    .await;

    assert!(created.id > 0);
    assert_eq!(created.title, "New Message");
    assert_eq!(created.recipient_id, 123);
    assert!(!created.read);
    assert_eq!(created.notification_type, NotificationType::Email);
}

#[tokio::test]
async fn test_create_without_type_defaults_to_system() {
    let app = test_app().await;

    let created = create(
        &app,
        json!({"title": "Hi", "message": "Hello", "recipientId": 5}),
    )
    .await;

    assert_eq!(created.notification_type, NotificationType::System);
}

#[tokio::test]
async fn test_create_with_empty_title_returns_bad_request() {
    let app = test_app().await;

    let (status, bytes) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/notifications",
            json!({"title": "", "message": "Hello", "recipientId": 5}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error.status, 400);
    assert!(error.message.contains("Validation failed"));
    let errors = error.errors.unwrap();
    assert_eq!(errors.get("title").unwrap(), "Title is required");
}

#[tokio::test]
async fn test_get_missing_notification_returns_not_found() {
    let app = test_app().await;

    let (status, bytes) = send(&app, empty_request(Method::GET, "/api/v1/notifications/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error.status, 404);
    assert!(error.message.contains("999"));
    assert!(error.errors.is_none());
}

#[tokio::test]
async fn test_get_notification_round_trip() {
    let app = test_app().await;

    let created = create(
        &app,
        json!({"title": "Hi", "message": "Hello", "recipientId": 5, "type": "PUSH"}),
    )
    .await;

    let (status, bytes) = send(
        &app,
        empty_request(Method::GET, &format!("/api/v1/notifications/{}", created.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let fetched: NotificationResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.notification_type, NotificationType::Push);
    // Wire timestamps use yyyy-MM-ddTHH:mm:ss
    assert_eq!(fetched.created_at.len(), 19);
}

#[tokio::test]
async fn test_mark_as_read_is_idempotent_over_http() {
    let app = test_app().await;

    let created = create(
        &app,
        json!({"title": "Hi", "message": "Hello", "recipientId": 5}),
    )
    .await;

    let uri = format!("/api/v1/notifications/{}/read", created.id);

    let (status, bytes) = send(&app, empty_request(Method::PUT, &uri)).await;
    assert_eq!(status, StatusCode::OK);
    let first: NotificationResponse = serde_json::from_slice(&bytes).unwrap();
    assert!(first.read);

    let (status, bytes) = send(&app, empty_request(Method::PUT, &uri)).await;
    assert_eq!(status, StatusCode::OK);
    let second: NotificationResponse = serde_json::from_slice(&bytes).unwrap();
    assert!(second.read);
    assert_eq!(second.updated_at, first.updated_at);
}

#[tokio::test]
async fn test_mark_as_read_missing_returns_not_found() {
    let app = test_app().await;

    let (status, bytes) = send(
        &app,
        empty_request(Method::PUT, "/api/v1/notifications/999/read"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert!(error.message.contains("999"));
}

#[tokio::test]
async fn test_delete_notification_returns_no_content() {
    let app = test_app().await;

    let created = create(
        &app,
        json!({"title": "Hi", "message": "Hello", "recipientId": 5}),
    )
    .await;

    let uri = format!("/api/v1/notifications/{}", created.id);

    let (status, bytes) = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, _) = send(&app, empty_request(Method::GET, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recipient_listing_and_unread_count() {
    let app = test_app().await;

    let first = create(
        &app,
        json!({"title": "a", "message": "a body", "recipientId": 55}),
    )
    .await;
    create(&app, json!({"title": "b", "message": "b body", "recipientId": 55})).await;
    create(&app, json!({"title": "c", "message": "c body", "recipientId": 55})).await;
    create(&app, json!({"title": "d", "message": "d body", "recipientId": 56})).await;

    let (status, _) = send(
        &app,
        empty_request(
            Method::PUT,
            &format!("/api/v1/notifications/{}/read", first.id),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, bytes) = send(
        &app,
        empty_request(Method::GET, "/api/v1/notifications/recipient/55"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<NotificationResponse> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(all.len(), 3);

    let (status, bytes) = send(
        &app,
        empty_request(Method::GET, "/api/v1/notifications/unread/55"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let unread: Vec<NotificationResponse> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(unread.len(), 2);
    assert!(unread.iter().all(|n| !n.read));

    let (status, bytes) = send(
        &app,
        empty_request(Method::GET, "/api/v1/notifications/unread-count/55"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Bare integer body
    assert_eq!(String::from_utf8(bytes).unwrap(), "2");
}

#[tokio::test]
async fn test_unknown_recipient_returns_empty_list_and_zero_count() {
    let app = test_app().await;

    let (status, bytes) = send(
        &app,
        empty_request(Method::GET, "/api/v1/notifications/recipient/404"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<NotificationResponse> = serde_json::from_slice(&bytes).unwrap();
    assert!(all.is_empty());

    let (status, bytes) = send(
        &app,
        empty_request(Method::GET, "/api/v1/notifications/unread-count/404"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "0");
}

#[tokio::test]
async fn test_organisation_endpoint_serves_configured_info() {
    let app = test_app().await;

    let (status, bytes) = send(&app, empty_request(Method::GET, "/api/v1/organisation")).await;

    assert_eq!(status, StatusCode::OK);
    let info: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(info["name"], "Relatia");
    assert_eq!(info["contact"]["email"], "support@relatia.example");
    assert_eq!(info["social"]["facebook"], "https://www.facebook.com/relatia");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app().await;

    let (status, bytes) = send(&app, empty_request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "OK");
}
