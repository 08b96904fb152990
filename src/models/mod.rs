//! Database models and DTOs for all domain entities.

pub mod activity;
pub mod admin;
pub mod blog;
pub mod client;
pub mod contact;
pub mod event;
pub mod filter;
pub mod member;
pub mod notification;
pub mod pagination;
pub mod permissions;
pub mod project;
pub mod settings;
