//! Client accounts that projects are billed against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "client_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
}

impl ClientStatus {
    /// Parse a `status` query value; `all`, empty, or unknown skips the
    /// filter.
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    pub avatar: Option<String>,
    pub status: Option<ClientStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    pub name: Option<String>,
    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub status: Option<ClientStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_query_parsing() {
        assert_eq!(ClientStatus::from_query("active"), Some(ClientStatus::Active));
        assert_eq!(ClientStatus::from_query("inactive"), Some(ClientStatus::Inactive));
        assert_eq!(ClientStatus::from_query("all"), None);
        assert_eq!(ClientStatus::from_query(""), None);
        assert_eq!(ClientStatus::from_query("garbage"), None);
    }

    #[test]
    fn status_round_trip() {
        let s: ClientStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(s, ClientStatus::Inactive);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"inactive\"");
    }
}
