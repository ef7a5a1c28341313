//! Authentication DTOs

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::Registration;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "mark@example.com")]
    #[validate(
        required(message = "email is required"),
        email(message = "email must be an email")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "mark@example.com")]
    #[validate(
        required(message = "email is required"),
        email(message = "email must be an email")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 6, max = 128, message = "password must be 6-128 characters")
    )]
    pub password: Option<String>,
    #[schema(example = "Mark")]
    pub first_name: Option<String>,
    #[schema(example = "Spencer")]
    pub last_name: Option<String>,
    #[schema(example = true)]
    #[validate(
        required(message = "userAgreement must be accepted"),
        custom(function = "accepted")
    )]
    pub user_agreement: Option<bool>,
}

fn accepted(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        let mut err = ValidationError::new("accepted");
        err.message = Some("userAgreement must be accepted".into());
        Err(err)
    }
}

impl From<RegisterRequest> for Registration {
    fn from(r: RegisterRequest) -> Self {
        Self {
            email: r.email.unwrap_or_default(),
            password: r.password.unwrap_or_default(),
            first_name: r.first_name,
            last_name: r.last_name,
            user_agreement: r.user_agreement.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_requires_agreement() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "email": "mark@example.com",
            "password": "password1",
            "userAgreement": false,
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_agreement"));
    }

    #[test]
    fn register_rejects_bad_email_and_short_password() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "email": "not-an-email",
            "password": "123",
            "userAgreement": true,
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn login_requires_both_fields() {
        let req: LoginRequest = serde_json::from_value(json!({})).unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }
}
