//! Activity log entries for the recent-activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Severity tint shared by the activity and notification feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "feed_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Info,
    Success,
    Warning,
    Error,
}

impl Default for FeedKind {
    fn default() -> Self {
        FeedKind::Info
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: Uuid,
    pub text: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: FeedKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateActivity {
    #[validate(length(min = 1, message = "is required"))]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: FeedKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults_to_info() {
        let payload: CreateActivity = serde_json::from_str("{\"text\":\"hello\"}").unwrap();
        assert_eq!(payload.kind, FeedKind::Info);
    }

    #[test]
    fn activity_serializes_type_field() {
        let entry = ActivityLog {
            id: Uuid::nil(),
            text: "Member updated".to_string(),
            kind: FeedKind::Warning,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "warning");
    }
}
