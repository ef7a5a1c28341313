//! Résumé module — education, work history and projects of the caller

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
