use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::validator::Schema;

/// Placeholder token handed out by the stub login.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

const REGISTER_PASSWORD_MIN_CHARS: usize = 8;

// Fields are optional so that absence is reported by validation, in field
// order, rather than by deserialization. Keys outside the schema land in
// `extra` and are reported only once the known fields are valid.

// Registration request structure
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(
        required(message = "email is required"),
        custom(function = "email_address")
    )]
    #[schema(example = "a@b.com")]
    pub email: Option<String>,
    #[validate(
        required(message = "password is required"),
        custom(function = "register_password")
    )]
    pub password: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Schema for RegisterRequest {
    const NAME: &'static str = "register";
    const FIELDS: &'static [&'static str] = &["email", "password"];

    fn unknown_field(&self) -> Option<&str> {
        self.extra.keys().next().map(String::as_str)
    }
}

// Login request structure
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        required(message = "email is required"),
        custom(function = "email_address")
    )]
    #[schema(example = "a@b.com")]
    pub email: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is not allowed to be empty")
    )]
    pub password: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Schema for LoginRequest {
    const NAME: &'static str = "login";
    const FIELDS: &'static [&'static str] = &["email", "password"];

    fn unknown_field(&self) -> Option<&str> {
        self.extra.keys().next().map(String::as_str)
    }
}

/// Address syntax check plus a domain of at least two labels, the last one
/// non-empty. Plain `email` validation accepts `a@b`.
fn email_address(email: &str) -> Result<(), ValidationError> {
    let dotted_domain = email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(head, tld)| !head.is_empty() && !tld.is_empty());

    if dotted_domain && email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("email must be a valid email".into()))
    }
}

fn register_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("empty")
            .with_message("password is not allowed to be empty".into()));
    }
    if password.chars().count() < REGISTER_PASSWORD_MIN_CHARS {
        return Err(ValidationError::new("length")
            .with_message("password must be at least 8 characters long".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}
