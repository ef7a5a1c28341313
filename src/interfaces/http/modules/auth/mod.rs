//! Authentication module — register, login, token refresh

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
