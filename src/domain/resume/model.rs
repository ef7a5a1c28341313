//! Résumé sections owned by a user
//!
//! Dates are kept as the free-form strings the user typed ("01.01.2022",
//! "present", ...), never parsed.

use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct Education {
    pub id: String,
    pub user_id: String,
    /// Stack or speciality studied
    pub position: Option<String>,
    pub school_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Work {
    pub id: String,
    pub user_id: String,
    pub position: Option<String>,
    pub company_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub address: Option<String>,
    pub duties: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub stack: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub repository: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewEducation {
    pub position: Option<String>,
    pub school_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewWork {
    pub position: Option<String>,
    pub company_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub address: Option<String>,
    pub duties: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: Option<String>,
    pub stack: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub repository: Option<String>,
}
