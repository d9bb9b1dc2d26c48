use crate::error::AppError;
use crate::models::{ProfileUpdate, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

const REDACTED: &str = "<redacted>";

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Email/password pair submitted by the sign-in form.
///
/// Never serialized, and `Debug` output omits the password.
#[derive(Clone, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
    pub role: Role,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(|e| {
            let mut err = AppError::from(e);
            if err.field_errors.len() > 1 {
                err.message = "Please fill in all fields".to_string();
            }
            err
        })
    }
}

/// Fields of the registration form, including the confirmation that is
/// checked before the session store is involved.
#[derive(Clone, PartialEq, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
    pub role: Role,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("role", &self.role)
            .finish()
    }
}

impl RegisterRequest {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(|e| {
            let mut err = AppError::from(e);
            if err.field_errors.len() > 1 {
                err.message = "Please fill in all fields".to_string();
            }
            err
        })
    }

    /// The sign-in half of the request, handed to the session store.
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest::new(self.email.clone(), self.password.clone(), self.role)
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("confirm_password", &REDACTED)
            .field("role", &self.role)
            .finish()
    }
}

/// Editable profile fields from the settings page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct ProfileForm {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar: Option<String>,
}

impl ProfileForm {
    /// Validate and turn the form into a partial update. A blank avatar
    /// leaves the current one in place.
    pub fn into_update(self) -> Result<ProfileUpdate, AppError> {
        let form = ProfileForm {
            name: self.name.trim().to_string(),
            avatar: self
                .avatar
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        };
        form.validate()?;
        Ok(ProfileUpdate {
            name: Some(form.name),
            avatar: form.avatar,
            ..Default::default()
        })
    }
}
