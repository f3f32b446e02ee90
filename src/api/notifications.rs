use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    api::{ApiError, ApiResult, AppState},
    models::NotificationType,
};

// Request DTOs

/// Wire shape of a create request. All fields deserialize as optional so that
/// missing or blank fields surface through the validation error map instead
/// of a body rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recipient_id: Option<i64>,
    #[serde(default, rename = "type")]
    pub notification_type: Option<NotificationType>,
}

/// A request that passed shape validation. Only this form reaches the
/// service layer.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub title: String,
    pub message: String,
    pub recipient_id: i64,
    pub notification_type: Option<NotificationType>,
}

impl NotificationRequest {
    pub fn validate(self) -> Result<CreateNotification, HashMap<String, String>> {
        let mut errors = HashMap::new();

        match &self.title {
            None => {
                errors.insert("title".to_string(), "Title is required".to_string());
            }
            Some(title) if title.trim().is_empty() => {
                errors.insert("title".to_string(), "Title is required".to_string());
            }
            Some(title) if title.chars().count() > 100 => {
                errors.insert(
                    "title".to_string(),
                    "Title must not exceed 100 characters".to_string(),
                );
            }
            Some(_) => {}
        }

        match &self.message {
            None => {
                errors.insert("message".to_string(), "Message is required".to_string());
            }
            Some(message) if message.trim().is_empty() => {
                errors.insert("message".to_string(), "Message is required".to_string());
            }
            Some(_) => {}
        }

        if self.recipient_id.is_none() {
            errors.insert(
                "recipientId".to_string(),
                "Recipient ID is required".to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateNotification {
            title: self.title.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            recipient_id: self.recipient_id.unwrap_or_default(),
            notification_type: self.notification_type,
        })
    }
}

// Response DTOs

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub recipient_id: i64,
    pub read: bool,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub created_at: String,
    pub updated_at: String,
}

// API Handlers

/// Create a new notification
pub async fn create_notification(
    State(state): State<AppState>,
    Json(request): Json<NotificationRequest>,
) -> ApiResult<impl IntoResponse> {
    let request = request.validate().map_err(ApiError::Validation)?;

    let response = state.notifications.create_notification(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a notification by its id
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let response = state.notifications.get_notification_by_id(id).await?;

    Ok(Json(response))
}

/// List all notifications for a recipient, newest first
pub async fn get_notifications_by_recipient(
    State(state): State<AppState>,
    Path(recipient_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let responses = state
        .notifications
        .get_notifications_by_recipient_id(recipient_id)
        .await?;

    Ok(Json(responses))
}

/// List unread notifications for a recipient, newest first
pub async fn get_unread_notifications(
    State(state): State<AppState>,
    Path(recipient_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let responses = state
        .notifications
        .get_unread_notifications(recipient_id)
        .await?;

    Ok(Json(responses))
}

/// Mark a notification as read
pub async fn mark_as_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let response = state.notifications.mark_as_read(id).await?;

    Ok(Json(response))
}

/// Delete a notification
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    state.notifications.delete_notification(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the unread notification count for a recipient
pub async fn get_unread_count(
    State(state): State<AppState>,
    Path(recipient_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let count = state.notifications.get_unread_count(recipient_id).await?;

    Ok(Json(count))
}
