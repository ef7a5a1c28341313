//! Database entities module

pub mod education;
pub mod project;
pub mod user;
pub mod work;

pub use education::Entity as Education;
pub use project::Entity as Project;
pub use user::Entity as User;
pub use work::Entity as Work;
