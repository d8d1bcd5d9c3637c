//! DTOs exchanged with the dashboard over the JSON API.

pub mod admin;
pub mod api;
pub mod user;
