//! Résumé sections aggregate: education, work history, projects

pub mod model;
pub mod repository;

pub use model::{Education, NewEducation, NewProject, NewWork, Project, Work};
pub use repository::ResumeRepositoryInterface;
