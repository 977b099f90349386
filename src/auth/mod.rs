//! Sign-in form
//!
//! Validates what the user typed into the login screen. There is no account
//! service behind it: a valid form is simply accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Login validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Password must contain at least {min} character(s)")]
    PasswordTooShort { min: usize },
}

/// Field the error belongs to, so the form can show it under that input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginError {
    pub fn field(&self) -> LoginField {
        match self {
            LoginError::InvalidEmail => LoginField::Email,
            LoginError::PasswordTooShort { .. } => LoginField::Password,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Form values that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

/// Short notification shown after submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .map(|pattern| pattern.is_match(email))
        .unwrap_or(false)
}

impl LoginForm {
    /// All field errors, email first
    pub fn errors(&self) -> Vec<LoginError> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(LoginError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(LoginError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        errors
    }

    pub fn validate(&self) -> Result<Credentials, LoginError> {
        if let Some(e) = self.errors().into_iter().next() {
            return Err(e);
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Handle a submitted form. Invalid forms keep the user on the login screen
/// with field errors; valid ones are accepted with a success toast.
pub fn handle_submit(form: &LoginForm) -> Result<Toast, Vec<LoginError>> {
    match form.validate() {
        Ok(credentials) => {
            tracing::info!("Signed in as {}", credentials.email);
            Ok(Toast::success("Successfully logged in!"))
        }
        Err(_) => Err(form.errors()),
    }
}
