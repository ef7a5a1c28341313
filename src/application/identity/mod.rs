//! Identity module — user management & authentication
//!
//! Contains the `UserService` which orchestrates all user-related
//! use-cases: registration, login, token refresh, profile updates and
//! account deletion.

pub mod service;

pub use service::{AuthResult, Registration, UserService};
