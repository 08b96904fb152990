//! Staff admin accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Full admin row from the database (includes password_hash — never
/// serialize to the API).
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_primary: bool,
    pub allow_registration: bool,
    pub failed_login_attempts: i32,
    pub locked_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin response DTO — excludes password_hash and lockout bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_primary: bool,
    pub allow_registration: bool,
}

impl From<Admin> for AdminResponse {
    fn from(a: Admin) -> Self {
        Self {
            id: a.id,
            name: a.name,
            email: a.email,
            is_primary: a.is_primary,
            allow_registration: a.allow_registration,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterAdmin {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_excludes_password() {
        let admin = Admin {
            id: Uuid::nil(),
            name: "Admin".to_string(),
            email: "admin@dashboard.com".to_string(),
            password_hash: "secret_hash".to_string(),
            is_primary: true,
            allow_registration: false,
            failed_login_attempts: 0,
            locked_until: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&AdminResponse::from(admin)).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
        assert!(json.contains("\"isPrimary\":true"));
    }

    #[test]
    fn register_payload_validation() {
        let ok = RegisterAdmin {
            name: "New Admin".to_string(),
            email: "new@dashboard.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = RegisterAdmin {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            password: "123".to_string(),
        };
        assert!(bad.validate().is_err());
    }
}
