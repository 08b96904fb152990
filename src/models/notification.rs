//! Dashboard notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::activity::FeedKind;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub text: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: FeedKind,
    pub color: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotification {
    #[validate(length(min = 1, message = "is required"))]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: FeedKind,
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_wire_shape() {
        let n = Notification {
            id: Uuid::nil(),
            text: "New member joined".to_string(),
            kind: FeedKind::Success,
            color: "bg-emerald-500".to_string(),
            is_read: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["isRead"], false);
        assert_eq!(json["color"], "bg-emerald-500");
    }
}
