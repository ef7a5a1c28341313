//! In-memory repositories for unit tests
//!
//! Every trait call bumps a counter so tests can assert that a rejected
//! request never reached the service.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, User, UserProfile,
    UserRepositoryInterface,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
    calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl InMemoryUserRepository {
    /// Total number of repository calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn blank_user(id: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id: id.to_string(),
        email: email.to_string(),
        password_hash: String::new(),
        first_name: None,
        first_name_ua: None,
        last_name: None,
        last_name_ua: None,
        phone: None,
        position: None,
        resume: None,
        english_level: None,
        ukraine_langue: None,
        russian_langue: None,
        about_me: None,
        about_me_ua: None,
        telegram: None,
        linkedin: None,
        github: None,
        facebook: None,
        instagram: None,
        viber: None,
        whatsapp: None,
        user_agreement: false,
        consent_of_use: false,
        site_resume: None,
        color_schema: None,
        sample: None,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        self.touch();
        if self.users.iter().any(|u| u.email == dto.email) {
            return Err(DomainError::Conflict("Email already exists".into()));
        }

        let mut user = blank_user(&uuid::Uuid::new_v4().to_string(), &dto.email);
        user.password_hash = dto.password_hash;
        user.first_name = dto.first_name;
        user.last_name = dto.last_name;
        user.user_agreement = dto.user_agreement;

        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.touch();
        Ok(self
            .users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.value().clone()))
    }

    async fn get_profile(&self, id: &str) -> DomainResult<Option<UserProfile>> {
        self.touch();
        Ok(self.users.get(id).map(|u| UserProfile {
            user: u.value().clone(),
            educations: Vec::new(),
            works: Vec::new(),
            projects: Vec::new(),
        }))
    }

    async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        self.touch();
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        let Some(mut user) = self.users.get_mut(id) else {
            return Ok(None);
        };

        macro_rules! patch {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = dto.$field { user.$field = Some(v); })*
            };
        }
        patch!(
            first_name, first_name_ua, last_name, last_name_ua, phone, position, resume,
            english_level, ukraine_langue, russian_langue, about_me, about_me_ua, telegram,
            linkedin, github, facebook, instagram, viber, whatsapp, site_resume, color_schema,
            sample,
        );
        if let Some(consent) = dto.consent_of_use {
            user.consent_of_use = consent;
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: &str) -> DomainResult<()> {
        self.touch();
        self.users
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::user_not_found("id", id))
    }
}
