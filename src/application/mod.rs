//! Application layer
//!
//! Use-case orchestration between the HTTP interface and the repositories.

pub mod identity;
pub mod resume;

pub use identity::{AuthResult, Registration, UserService};
pub use resume::ResumeService;
