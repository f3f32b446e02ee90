use sqlx::any::AnyRow;
use sqlx::Row;

use crate::{
    api::error::{ApiError, ApiResult},
    models::{now_timestamp, NewNotification, Notification, NotificationType},
    Database,
};

const NOTIFICATION_COLUMNS: &str =
    "id, title, message, recipient_id, is_read, notification_type, created_at, updated_at, version";

fn notification_from_row(row: &AnyRow) -> ApiResult<Notification> {
    let notification_type: String = row.try_get("notification_type")?;
    let is_read: i32 = row.try_get("is_read")?;

    Ok(Notification {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        message: row.try_get("message")?,
        recipient_id: row.try_get("recipient_id")?,
        read: is_read != 0,
        notification_type: NotificationType::from(notification_type),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        version: row.try_get("version")?,
    })
}

impl Database {
    /// Insert a notification, stamping both timestamps with the same value
    /// and starting the optimistic-concurrency version at 0.
    pub async fn insert_notification(
        &self,
        notification: &NewNotification,
    ) -> ApiResult<Notification> {
        let now = now_timestamp();

        let row = sqlx::query(
            "INSERT INTO notifications (title, message, recipient_id, is_read, notification_type, created_at, updated_at, version)
             VALUES (?, ?, ?, ?, ?, ?, ?, 0)
             RETURNING id",
        )
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.recipient_id)
        .bind(if notification.read { 1 } else { 0 })
        .bind(notification.notification_type.as_str())
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.try_get("id")?;

        Ok(Notification {
            id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            recipient_id: notification.recipient_id,
            read: notification.read,
            notification_type: notification.notification_type,
            created_at: now.clone(),
            updated_at: now,
            version: 0,
        })
    }

    pub async fn get_notification_by_id(&self, id: i64) -> ApiResult<Option<Notification>> {
        let row = sqlx::query(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(notification_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// All notifications for a recipient, newest first. Ties on the
    /// second-precision timestamp fall back to insertion order.
    pub async fn list_notifications_by_recipient(
        &self,
        recipient_id: i64,
    ) -> ApiResult<Vec<Notification>> {
        let rows = sqlx::query(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE recipient_id = ?
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(notification_from_row).collect()
    }

    pub async fn list_unread_by_recipient(
        &self,
        recipient_id: i64,
    ) -> ApiResult<Vec<Notification>> {
        let rows = sqlx::query(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE recipient_id = ? AND is_read = 0
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(notification_from_row).collect()
    }

    pub async fn count_by_recipient(&self, recipient_id: i64) -> ApiResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM notifications WHERE recipient_id = ?",
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count)
    }

    pub async fn count_unread_by_recipient(&self, recipient_id: i64) -> ApiResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM notifications WHERE recipient_id = ? AND is_read = 0",
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count)
    }

    pub async fn notification_exists(&self, id: i64) -> ApiResult<bool> {
        let row = sqlx::query("SELECT id FROM notifications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Unconditional delete. Not-found signaling is the caller's job; the
    /// service checks existence first.
    pub async fn delete_notification(&self, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Write back all mutable fields, refresh updated_at and bump the
    /// version. A write whose expected version is stale affects zero rows and
    /// is reported as a conflict.
    pub async fn update_notification(&self, notification: &Notification) -> ApiResult<Notification> {
        let now = now_timestamp();

        let result = sqlx::query(
            "UPDATE notifications
             SET title = ?, message = ?, recipient_id = ?, is_read = ?, notification_type = ?, updated_at = ?, version = version + 1
             WHERE id = ? AND version = ?",
        )
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.recipient_id)
        .bind(if notification.read { 1 } else { 0 })
        .bind(notification.notification_type.as_str())
        .bind(&now)
        .bind(notification.id)
        .bind(notification.version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            if self.notification_exists(notification.id).await? {
                return Err(ApiError::Conflict(format!(
                    "Notification {} was modified concurrently (expected version {})",
                    notification.id, notification.version
                )));
            }
            return Err(ApiError::NotFound(format!(
                "Notification not found with id: {}",
                notification.id
            )));
        }

        Ok(Notification {
            updated_at: now,
            version: notification.version + 1,
            ..notification.clone()
        })
    }
}
