//! Business logic services.

pub mod account;
pub mod activities;
pub mod auth;
pub mod blogs;
pub mod clients;
pub mod contacts;
pub mod events;
pub mod notifications;
pub mod projects;
pub mod settings;
pub mod team;
