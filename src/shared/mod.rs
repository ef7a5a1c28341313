pub mod shutdown;
pub mod types;
pub mod validations;

pub use types::*;
