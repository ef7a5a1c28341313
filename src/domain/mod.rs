//! Domain layer: entities, DTOs and repository interfaces

pub mod resume;
pub mod user;

pub use resume::{
    Education, NewEducation, NewProject, NewWork, Project, ResumeRepositoryInterface, Work,
};
pub use user::{CreateUserDto, UpdateUserDto, User, UserProfile, UserRepositoryInterface};

pub use crate::shared::{DomainError, DomainResult};
