//! Feature modules, one per resource: DTOs plus handlers

pub mod auth;
pub mod health;
pub mod request_id;
pub mod resume;
pub mod users;
