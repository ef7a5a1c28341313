//! # Profile Service
//!
//! Backend for personal profiles and résumés: a user with localized names,
//! contacts and preferences, plus the education, work and project entries
//! they own. Everything is served over a JWT-guarded REST API with Swagger
//! documentation.
//!
//! ## Architecture
//!
//! - **domain**: entities, DTOs and repository interfaces
//! - **application**: use-case services (identity, résumé sections)
//! - **infrastructure**: SeaORM persistence, JWT and password crypto
//! - **interfaces**: HTTP router, guard middleware, handlers
//! - **shared**: errors, field validators, shutdown signal

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
