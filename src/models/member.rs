//! Team member model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A team member row. `role` is a free-text job title, unrelated to the
/// dashboard permission roles.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub tags: Json<Vec<String>>,
    pub online: bool,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMember {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub role: String,
    pub tags: Option<Vec<String>>,
    pub online: Option<bool>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub tags: Option<Vec<String>>,
    pub online: Option<bool>,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_serializes_camel_case() {
        let member = TeamMember {
            id: Uuid::nil(),
            name: "Tom Holland".to_string(),
            email: "tom@dashboard.com".to_string(),
            role: "Frontend Lead".to_string(),
            tags: Json(vec!["Vue".to_string(), "Design".to_string()]),
            online: true,
            avatar_url: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["avatarUrl"], serde_json::Value::Null);
        assert_eq!(json["tags"][0], "Vue");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn create_payload_requires_valid_email() {
        let payload = CreateTeamMember {
            name: "Ryan".to_string(),
            email: "nope".to_string(),
            role: "Intern".to_string(),
            tags: None,
            online: None,
            avatar_url: None,
        };
        assert!(payload.validate().is_err());
    }
}
