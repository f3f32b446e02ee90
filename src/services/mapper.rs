//! Pure conversions between wire DTOs and the notification entity. Nothing
//! here touches storage.

use crate::api::notifications::{CreateNotification, NotificationResponse};
use crate::models::{NewNotification, Notification, NotificationType};

/// Build an insert payload from a validated create request. New notifications
/// are always unread and default to the SYSTEM type when none was supplied.
pub fn to_entity(request: &CreateNotification) -> NewNotification {
    NewNotification {
        title: request.title.clone(),
        message: request.message.clone(),
        recipient_id: request.recipient_id,
        read: false,
        notification_type: request
            .notification_type
            .unwrap_or(NotificationType::System),
    }
}

/// 1:1 field projection of an entity onto the response DTO.
pub fn to_response(notification: &Notification) -> NotificationResponse {
    NotificationResponse {
        id: notification.id,
        title: notification.title.clone(),
        message: notification.message.clone(),
        recipient_id: notification.recipient_id,
        read: notification.read,
        notification_type: notification.notification_type,
        created_at: notification.created_at.clone(),
        updated_at: notification.updated_at.clone(),
    }
}

pub fn to_response_list(notifications: &[Notification]) -> Vec<NotificationResponse> {
    notifications.iter().map(to_response).collect()
}

/// Partial update of an entity. Only present fields overwrite; the read flag
/// is deliberately out of reach here, it changes through mark-as-read only.
#[derive(Debug, Default, Clone)]
pub struct NotificationUpdate {
    pub title: Option<String>,
    pub message: Option<String>,
    pub recipient_id: Option<i64>,
    pub notification_type: Option<NotificationType>,
}

pub fn apply_update(update: &NotificationUpdate, notification: &mut Notification) {
    if let Some(title) = &update.title {
        notification.title = title.clone();
    }
    if let Some(message) = &update.message {
        notification.message = message.clone();
    }
    if let Some(recipient_id) = update.recipient_id {
        notification.recipient_id = recipient_id;
    }
    if let Some(notification_type) = update.notification_type {
        notification.notification_type = notification_type;
    }
}
