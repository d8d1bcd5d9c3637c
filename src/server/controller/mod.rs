//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, call into the service layer and convert
//! domain models to DTOs. Every handler carries a `utoipa::path` description collected by
//! `router::ApiDoc`.

pub mod admin;
pub mod auth;
pub mod user;
