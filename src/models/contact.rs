//! Contact form submissions and their review workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    /// Parse a `status` query value; `all`, empty, or unknown skips the
    /// filter.
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Self::New),
            "read" => Some(Self::Read),
            "replied" => Some(Self::Replied),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactStatus {
    pub status: ContactStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_query_parsing() {
        assert_eq!(ContactStatus::from_query("new"), Some(ContactStatus::New));
        assert_eq!(
            ContactStatus::from_query("archived"),
            Some(ContactStatus::Archived)
        );
        assert_eq!(ContactStatus::from_query("all"), None);
        assert_eq!(ContactStatus::from_query("spam"), None);
    }
}
