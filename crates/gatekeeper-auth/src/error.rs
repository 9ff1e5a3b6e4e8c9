//! Failures raised while authenticating or authorizing a request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatekeeper_core::AppError;
use thiserror::Error;

/// Credential and permission failures.
///
/// The `Display` text of each variant is the message sent to the client.
/// Malformed, expired, and wrongly signed tokens all collapse into
/// [`AuthError::InvalidCredential`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("Missing token")]
    MissingCredential,

    /// Token failed signature, format, or expiry checks.
    #[error("Invalid or expired token")]
    InvalidCredential,

    /// A role check ran without a verified identity on the request.
    #[error("Forbidden: Insufficient Permissions")]
    Unauthenticated,

    /// The verified identity's role is not allowed.
    #[error("Forbidden: Insufficient Permissions")]
    InsufficientPermissions,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential => StatusCode::UNAUTHORIZED,
            AuthError::InvalidCredential
            | AuthError::Unauthenticated
            | AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
        }
    }

    /// Converts into an [`AppError`] carrying this error's status.
    ///
    /// Use this rather than `?`/`From`, which would map to a 500.
    pub fn into_app_error(self) -> AppError {
        AppError::new(self.status(), self)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.into_app_error().into_response()
    }
}
