//! Typed client-side mirror of server state.
//!
//! An explicit state container owned by the UI layer: every field is mutated
//! only through action methods that call the HTTP API and then apply the
//! described change. No ambient singletons.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::activity::{ActivityLog, CreateActivity, FeedKind};
use crate::models::admin::AdminResponse;
use crate::models::member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use crate::models::notification::{CreateNotification, Notification};
use crate::models::pagination::PageEnvelope;
use crate::models::permissions::Capabilities;
use crate::models::settings::{SettingsProfile, UpdateSettings};
use crate::services::auth::TokenPair;
use uuid::Uuid;

/// Activity and notification feeds keep at most this many entries in memory.
const FEED_CAP: usize = 20;

/// Errors surfaced by store actions.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

/// Minimal JSON API client holding the base URL and the bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: None,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn handle<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| status.to_string());
            return Err(StoreError::Api { status, message });
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        Self::handle(self.request(reqwest::Method::GET, path).send().await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        Self::handle(
            self.request(reqwest::Method::POST, path)
                .json(body)
                .send()
                .await?,
        )
        .await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        Self::handle(
            self.request(reqwest::Method::PUT, path)
                .json(body)
                .send()
                .await?,
        )
        .await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        Self::handle(self.request(reqwest::Method::PATCH, path).send().await?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        Self::handle(self.request(reqwest::Method::DELETE, path).send().await?).await
    }
}

/// Application state mirrored from the server.
#[derive(Debug)]
pub struct AppStore {
    api: ApiClient,
    pub is_authenticated: bool,
    pub profile: SettingsProfile,
    pub admin: Option<AdminResponse>,
    pub team: Vec<TeamMember>,
    pub activities: Vec<ActivityLog>,
    pub notifications: Vec<Notification>,
}

impl AppStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
            is_authenticated: false,
            profile: SettingsProfile::default(),
            admin: None,
            team: Vec::new(),
            activities: Vec::new(),
            notifications: Vec::new(),
        }
    }

    // Derived getters

    pub fn total_team_count(&self) -> usize {
        self.team.len()
    }

    pub fn online_count(&self) -> usize {
        self.team.iter().filter(|m| m.online).count()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Capability set for UI gating, resolved from the mirrored profile.
    pub fn capabilities(&self) -> Capabilities {
        let is_primary = self.admin.as_ref().map(|a| a.is_primary).unwrap_or(false);
        Capabilities::resolve(self.profile.user_role, is_primary)
    }

    // Actions

    /// Log in, then bootstrap the mirrored state.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), StoreError> {
        let tokens: TokenPair = self
            .api
            .post(
                "/api/auth/login",
                &serde_json::json!({"email": email, "password": password}),
            )
            .await?;
        self.api.access_token = Some(tokens.access_token);
        self.is_authenticated = true;
        self.admin = Some(self.api.get("/api/auth/me").await?);
        self.init().await;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.api.access_token = None;
        self.admin = None;
        self.team.clear();
        self.activities.clear();
        self.notifications.clear();
        self.profile = SettingsProfile::default();
    }

    /// Bootstrap the mirrored state with concurrent fetches.
    ///
    /// Results apply independently: a failure in one fetch leaves the others
    /// in place and is only logged.
    pub async fn init(&mut self) {
        let (team, activities, profile, notifications) = tokio::join!(
            self.api.get::<PageEnvelope<TeamMember>>("/api/team"),
            self.api.get::<PageEnvelope<ActivityLog>>("/api/activities"),
            self.api.get::<SettingsProfile>("/api/settings"),
            self.api.get::<PageEnvelope<Notification>>("/api/notifications"),
        );

        match team {
            Ok(envelope) => self.team = envelope.data,
            Err(e) => tracing::warn!(error = %e, "Failed to load team"),
        }
        match activities {
            Ok(envelope) => self.activities = envelope.data,
            Err(e) => tracing::warn!(error = %e, "Failed to load activities"),
        }
        match profile {
            Ok(p) => self.profile = p,
            Err(e) => tracing::warn!(error = %e, "Failed to load settings"),
        }
        match notifications {
            Ok(envelope) => self.notifications = envelope.data,
            Err(e) => tracing::warn!(error = %e, "Failed to load notifications"),
        }
    }

    /// Append to the activity feed, keeping the newest FEED_CAP entries.
    pub async fn log_activity(&mut self, text: &str, kind: FeedKind) -> Result<(), StoreError> {
        let entry: ActivityLog = self
            .api
            .post(
                "/api/activities",
                &CreateActivity {
                    text: text.to_string(),
                    kind,
                },
            )
            .await?;
        self.apply_activity(entry);
        Ok(())
    }

    pub async fn create_notification(
        &mut self,
        text: &str,
        kind: FeedKind,
        color: &str,
    ) -> Result<(), StoreError> {
        let notification: Notification = self
            .api
            .post(
                "/api/notifications",
                &CreateNotification {
                    text: text.to_string(),
                    kind,
                    color: Some(color.to_string()),
                },
            )
            .await?;
        self.apply_notification(notification);
        Ok(())
    }

    pub async fn add_team_member(
        &mut self,
        member: &CreateTeamMember,
    ) -> Result<(), StoreError> {
        match self.api.post::<_, TeamMember>("/api/team", member).await {
            Ok(created) => {
                let name = created.name.clone();
                self.team.insert(0, created);
                let _ = self
                    .log_activity(&format!("New member added: {name}"), FeedKind::Success)
                    .await;
                let _ = self
                    .create_notification(
                        &format!("New member joined: {name}"),
                        FeedKind::Success,
                        "bg-emerald-500",
                    )
                    .await;
                Ok(())
            }
            Err(e) => {
                let _ = self.log_activity("Failed to add member", FeedKind::Error).await;
                Err(e)
            }
        }
    }

    pub async fn edit_team_member(
        &mut self,
        id: Uuid,
        update: &UpdateTeamMember,
    ) -> Result<(), StoreError> {
        match self
            .api
            .put::<_, TeamMember>(&format!("/api/team/{id}"), update)
            .await
        {
            Ok(updated) => {
                let name = updated.name.clone();
                if let Some(existing) = self.team.iter_mut().find(|m| m.id == id) {
                    *existing = updated;
                }
                let _ = self
                    .log_activity(&format!("Member updated: {name}"), FeedKind::Info)
                    .await;
                Ok(())
            }
            Err(e) => {
                let _ = self
                    .log_activity("Failed to update member", FeedKind::Error)
                    .await;
                Err(e)
            }
        }
    }

    pub async fn remove_team_member(&mut self, id: Uuid) -> Result<(), StoreError> {
        let removed_name = self.team.iter().find(|m| m.id == id).map(|m| m.name.clone());
        match self
            .api
            .delete::<serde_json::Value>(&format!("/api/team/{id}"))
            .await
        {
            Ok(_) => {
                self.team.retain(|m| m.id != id);
                let _ = self.log_activity("Member removed", FeedKind::Warning).await;
                let text = match removed_name {
                    Some(name) => format!("Team member removed: {name}"),
                    None => "Team member removed".to_string(),
                };
                let _ = self
                    .create_notification(&text, FeedKind::Warning, "bg-rose-500")
                    .await;
                Ok(())
            }
            Err(e) => {
                let _ = self
                    .log_activity("Failed to remove member", FeedKind::Error)
                    .await;
                Err(e)
            }
        }
    }

    pub async fn update_settings(&mut self, payload: &UpdateSettings) -> Result<(), StoreError> {
        match self
            .api
            .post::<_, SettingsProfile>("/api/settings", payload)
            .await
        {
            Ok(profile) => {
                self.profile = profile;
                let _ = self
                    .log_activity("User profile settings updated", FeedKind::Info)
                    .await;
                Ok(())
            }
            Err(e) => {
                let _ = self
                    .log_activity("Failed to update settings", FeedKind::Error)
                    .await;
                Err(e)
            }
        }
    }

    pub async fn mark_notification_read(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.api
            .patch::<Notification>(&format!("/api/notifications/{id}"))
            .await?;
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.is_read = true;
        }
        Ok(())
    }

    pub async fn mark_all_notifications_read(&mut self) -> Result<(), StoreError> {
        self.api
            .post::<_, serde_json::Value>("/api/notifications/read-all", &serde_json::json!({}))
            .await?;
        for n in &mut self.notifications {
            n.is_read = true;
        }
        Ok(())
    }

    // Described mutations, separated so they can be tested without a server.

    fn apply_activity(&mut self, entry: ActivityLog) {
        self.activities.insert(0, entry);
        self.activities.truncate(FEED_CAP);
    }

    fn apply_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
        self.notifications.truncate(FEED_CAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn member(online: bool) -> TeamMember {
        TeamMember {
            id: Uuid::new_v4(),
            name: "Tom".to_string(),
            email: format!("{}@dashboard.com", Uuid::new_v4()),
            role: "Dev".to_string(),
            tags: Json(vec![]),
            online,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    fn notification(is_read: bool) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            text: "hello".to_string(),
            kind: FeedKind::Info,
            color: "bg-indigo-500".to_string(),
            is_read,
            created_at: Utc::now(),
        }
    }

    fn activity(text: &str) -> ActivityLog {
        ActivityLog {
            id: Uuid::new_v4(),
            text: text.to_string(),
            kind: FeedKind::Info,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn derived_getters() {
        let mut store = AppStore::new("http://localhost:3000");
        store.team = vec![member(true), member(false), member(true)];
        store.notifications = vec![notification(false), notification(true)];

        assert_eq!(store.total_team_count(), 3);
        assert_eq!(store.online_count(), 2);
        assert_eq!(store.unread_notifications(), 1);
    }

    #[test]
    fn activity_feed_is_capped() {
        let mut store = AppStore::new("http://localhost:3000");
        for i in 0..(FEED_CAP + 5) {
            store.apply_activity(activity(&format!("entry {i}")));
        }
        assert_eq!(store.activities.len(), FEED_CAP);
        // Newest entry stays at the front.
        assert_eq!(store.activities[0].text, format!("entry {}", FEED_CAP + 4));
    }

    #[test]
    fn notification_feed_is_capped() {
        let mut store = AppStore::new("http://localhost:3000");
        for _ in 0..(FEED_CAP + 1) {
            store.apply_notification(notification(false));
        }
        assert_eq!(store.notifications.len(), FEED_CAP);
    }

    #[test]
    fn logout_clears_state() {
        let mut store = AppStore::new("http://localhost:3000");
        store.is_authenticated = true;
        store.team = vec![member(true)];
        store.notifications = vec![notification(false)];
        store.activities = vec![activity("x")];

        store.logout();

        assert!(!store.is_authenticated);
        assert!(store.team.is_empty());
        assert!(store.notifications.is_empty());
        assert!(store.activities.is_empty());
        assert_eq!(store.profile, SettingsProfile::default());
    }

    #[test]
    fn capabilities_follow_profile_role() {
        let mut store = AppStore::new("http://localhost:3000");
        store.profile.user_role = crate::models::permissions::Role::Member;
        let caps = store.capabilities();
        assert!(!caps.can_add_members);
        assert!(!caps.is_primary_admin);
    }
}
