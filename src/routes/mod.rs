//! Route handlers for the OpsDesk API.

pub mod account;
pub mod activities;
pub mod auth;
pub mod blogs;
pub mod clients;
pub mod contacts;
pub mod events;
pub mod health;
pub mod notifications;
pub mod projects;
pub mod settings;
pub mod team;

use axum::routing::{delete, get, patch, post};
use axum::Router;
use serde::Serialize;

use crate::AppState;

/// Plain acknowledgement body for mutations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build the full API router. Shared by `main.rs` and the integration tests.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/register", post(auth::register))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        // Admin account
        .route("/admin/update-name", post(account::update_name))
        .route("/admin/change-email", post(account::change_email))
        .route("/admin/change-password", post(account::change_password))
        .route("/admin/toggle-registration", post(account::toggle_registration))
        // Team
        .route("/team", get(team::list).post(team::create))
        .route(
            "/team/{id}",
            get(team::get_by_id).put(team::update).delete(team::delete),
        )
        // Clients
        .route("/clients", get(clients::list).post(clients::create))
        .route(
            "/clients/{id}",
            get(clients::get_by_id)
                .put(clients::update)
                .delete(clients::delete),
        )
        // Projects
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Blogs
        .route("/blogs", get(blogs::list).post(blogs::create))
        .route(
            "/blogs/{id}",
            get(blogs::get_by_id)
                .put(blogs::update)
                .delete(blogs::delete),
        )
        // Contacts
        .route("/contacts", get(contacts::list))
        .route("/contacts/{id}", delete(contacts::delete))
        .route("/contacts/{id}/status", patch(contacts::update_status))
        // Events
        .route("/events", get(events::list).post(events::create))
        .route(
            "/events/{id}",
            get(events::get_by_id)
                .put(events::update)
                .delete(events::delete),
        )
        // Notifications
        .route(
            "/notifications",
            get(notifications::list).post(notifications::create),
        )
        .route("/notifications/{id}", patch(notifications::mark_read))
        .route("/notifications/read-all", post(notifications::read_all))
        // Activities
        .route(
            "/activities",
            get(activities::list).post(activities::create),
        )
        // Settings & permissions
        .route("/settings", get(settings::get).post(settings::update))
        .route("/permissions", get(settings::permissions));

    Router::new()
        .nest("/api", api)
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .with_state(state)
}
