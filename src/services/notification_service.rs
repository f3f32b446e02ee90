use std::sync::Arc;

use crate::{
    api::error::{ApiError, ApiResult},
    api::notifications::{CreateNotification, NotificationResponse},
    services::mapper,
    Database,
};

/// Orchestrates the notification repository and mapper, and owns not-found
/// semantics and the read-state transition.
#[derive(Clone)]
pub struct NotificationService {
    db: Arc<Database>,
}

impl NotificationService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create_notification(
        &self,
        request: CreateNotification,
    ) -> ApiResult<NotificationResponse> {
        let notification = self.db.insert_notification(&mapper::to_entity(&request)).await?;

        tracing::debug!(
            "Created notification {} for recipient {}",
            notification.id,
            notification.recipient_id
        );

        Ok(mapper::to_response(&notification))
    }

    pub async fn get_notification_by_id(&self, id: i64) -> ApiResult<NotificationResponse> {
        let notification = self
            .db
            .get_notification_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(mapper::to_response(&notification))
    }

    pub async fn get_notifications_by_recipient_id(
        &self,
        recipient_id: i64,
    ) -> ApiResult<Vec<NotificationResponse>> {
        let notifications = self.db.list_notifications_by_recipient(recipient_id).await?;
        Ok(mapper::to_response_list(&notifications))
    }

    pub async fn get_unread_notifications(
        &self,
        recipient_id: i64,
    ) -> ApiResult<Vec<NotificationResponse>> {
        let notifications = self.db.list_unread_by_recipient(recipient_id).await?;
        Ok(mapper::to_response_list(&notifications))
    }

    /// Flip a notification to read. Idempotent: an already-read notification
    /// is returned as-is without a write, so its updated_at and version do
    /// not move.
    pub async fn mark_as_read(&self, id: i64) -> ApiResult<NotificationResponse> {
        let mut notification = self
            .db
            .get_notification_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if !notification.read {
            notification.read = true;
            notification = self.db.update_notification(&notification).await?;
        }

        Ok(mapper::to_response(&notification))
    }

    /// Delete a notification. The existence check makes the 404 signal
    /// correct; the repository delete itself is unconditional.
    pub async fn delete_notification(&self, id: i64) -> ApiResult<()> {
        if !self.db.notification_exists(id).await? {
            return Err(not_found(id));
        }

        self.db.delete_notification(id).await?;
        tracing::debug!("Deleted notification {}", id);
        Ok(())
    }

    pub async fn get_unread_count(&self, recipient_id: i64) -> ApiResult<i64> {
        self.db.count_unread_by_recipient(recipient_id).await
    }

    pub async fn get_count_by_recipient_id(&self, recipient_id: i64) -> ApiResult<i64> {
        self.db.count_by_recipient(recipient_id).await
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Notification not found with id: {}", id))
}
