//! The singleton settings profile read at session bootstrap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::permissions::Role;

#[derive(Debug, Clone, FromRow)]
pub struct SettingsRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub notifications: bool,
    pub user_role: Role,
    pub updated_at: DateTime<Utc>,
}

/// Profile DTO returned by `GET /api/settings`. When no row exists yet the
/// defaults are served instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsProfile {
    pub name: String,
    pub email: String,
    pub notifications: bool,
    pub user_role: Role,
}

impl Default for SettingsProfile {
    fn default() -> Self {
        Self {
            name: "Intern Developer".to_string(),
            email: "dev@dashboard.com".to_string(),
            notifications: true,
            user_role: Role::Admin,
        }
    }
}

impl From<SettingsRow> for SettingsProfile {
    fn from(row: SettingsRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            notifications: row.notifications,
            user_role: row.user_role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    pub notifications: Option<bool>,
    pub user_role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_bootstrap_values() {
        let profile = SettingsProfile::default();
        assert_eq!(profile.name, "Intern Developer");
        assert_eq!(profile.email, "dev@dashboard.com");
        assert!(profile.notifications);
        assert_eq!(profile.user_role, Role::Admin);
    }

    #[test]
    fn profile_serializes_camel_case() {
        let json = serde_json::to_value(SettingsProfile::default()).unwrap();
        assert_eq!(json["userRole"], "admin");
        assert_eq!(json["notifications"], true);
    }
}
