use serde::{Deserialize, Serialize};
use time::macros::format_description;

/// Timestamps are stored and served as `yyyy-MM-ddTHH:mm:ss`. The format has
/// no offset and second precision, and sorts lexicographically, so the stored
/// strings double as the `ORDER BY created_at` sort key.
pub fn now_timestamp() -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    time::OffsetDateTime::now_utc().format(&format).unwrap()
}

/// Delivery channel a notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationType {
    Email,
    Sms,
    Push,
    System,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Email => "EMAIL",
            NotificationType::Sms => "SMS",
            NotificationType::Push => "PUSH",
            NotificationType::System => "SYSTEM",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for NotificationType {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "EMAIL" => NotificationType::Email,
            "SMS" => NotificationType::Sms,
            "PUSH" => NotificationType::Push,
            _ => NotificationType::System,
        }
    }
}

/// Notification entity as persisted in the notifications table.
///
/// `version` is the optimistic-concurrency counter: it starts at 0 on insert
/// and the repository bumps it on every update, rejecting writes whose
/// expected version is stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub recipient_id: i64,
    pub read: bool,
    pub notification_type: NotificationType,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

/// Insert payload for a notification; the repository assigns id, timestamps
/// and the initial version.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub recipient_id: i64,
    pub read: bool,
    pub notification_type: NotificationType,
}
