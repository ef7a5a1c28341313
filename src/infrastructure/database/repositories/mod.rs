//! Database repository implementations
//!
//! SeaORM-backed implementations of the domain repository interfaces.

pub mod resume_repository;
pub mod user_repository;

pub use resume_repository::ResumeRepository;
pub use user_repository::UserRepository;
