//! Résumé sections: education, work history, projects

pub mod service;

pub use service::ResumeService;
