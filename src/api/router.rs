use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::{notifications, organisation, AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/notifications",
            post(notifications::create_notification),
        )
        .route(
            "/api/v1/notifications/:id",
            get(notifications::get_notification),
        )
        .route(
            "/api/v1/notifications/:id",
            delete(notifications::delete_notification),
        )
        .route(
            "/api/v1/notifications/:id/read",
            put(notifications::mark_as_read),
        )
        .route(
            "/api/v1/notifications/recipient/:recipient_id",
            get(notifications::get_notifications_by_recipient),
        )
        .route(
            "/api/v1/notifications/unread/:recipient_id",
            get(notifications::get_unread_notifications),
        )
        .route(
            "/api/v1/notifications/unread-count/:recipient_id",
            get(notifications::get_unread_count),
        )
        .route("/api/v1/organisation", get(organisation::organisation_info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}
