//! Projects and the client-join projection used by the list endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_type")]
pub enum ProjectType {
    Web,
    Mobile,
    #[sqlx(rename = "AI")]
    #[serde(rename = "AI")]
    Ai,
    DevOps,
    Consulting,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "pricing_package")]
pub enum PricingPackage {
    Basic,
    Professional,
    Enterprise,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client_id: Uuid,
    pub project_type: ProjectType,
    pub pricing_package: PricingPackage,
    pub value: i64,
    pub status: ProjectStatus,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Project row joined with its client's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithClient {
    pub id: Uuid,
    pub name: String,
    pub client_id: Uuid,
    pub client_name: Option<String>,
    pub client_avatar: Option<String>,
    pub project_type: ProjectType,
    pub pricing_package: PricingPackage,
    pub value: i64,
    pub status: ProjectStatus,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate attached to the project list's `meta.stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_value: i64,
    pub active: i64,
    pub pending: i64,
    pub completed: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    pub client_id: Uuid,
    pub project_type: ProjectType,
    pub pricing_package: PricingPackage,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub value: i64,
    pub status: Option<ProjectStatus>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub client_id: Option<Uuid>,
    pub project_type: Option<ProjectType>,
    pub pricing_package: Option<PricingPackage>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub value: Option<i64>,
    pub status: Option<ProjectStatus>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_wire_names() {
        assert_eq!(serde_json::to_string(&ProjectType::Ai).unwrap(), "\"AI\"");
        assert_eq!(
            serde_json::to_string(&ProjectType::DevOps).unwrap(),
            "\"DevOps\""
        );
        let t: ProjectType = serde_json::from_str("\"Consulting\"").unwrap();
        assert_eq!(t, ProjectType::Consulting);
    }

    #[test]
    fn status_query_parsing() {
        assert_eq!(
            ProjectStatus::from_query("completed"),
            Some(ProjectStatus::Completed)
        );
        assert_eq!(ProjectStatus::from_query("all"), None);
        assert_eq!(ProjectStatus::from_query("nope"), None);
    }

    #[test]
    fn stats_serialize_camel_case() {
        let stats = ProjectStats {
            total_value: 125_000,
            active: 3,
            pending: 2,
            completed: 7,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalValue"], 125_000);
        assert_eq!(json["completed"], 7);
    }
}
