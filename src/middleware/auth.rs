use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use gatekeeper_auth::{AuthError, Claims, JwtVerifier};
use gatekeeper_config::JwtConfig;

use crate::middleware::pipeline::Stage;

/// Prefix stripped from the `Authorization` header when present.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Pipeline stage that verifies the bearer token and attaches its [`Claims`]
/// to the request extensions.
///
/// - No header, or an empty one: [`AuthError::MissingCredential`]
/// - Anything that fails verification: [`AuthError::InvalidCredential`]
///
/// The `Bearer ` prefix is optional; without it the whole header value is
/// treated as the token.
#[derive(Clone)]
pub struct TokenVerifier {
    verifier: JwtVerifier,
}

impl TokenVerifier {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        Self {
            verifier: JwtVerifier::new(jwt_config),
        }
    }

    /// Extracts the raw token from the `Authorization` header.
    pub fn extract_token(parts: &Parts) -> Result<&str, AuthError> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingCredential)?;

        let value = value.to_str().map_err(|_| AuthError::InvalidCredential)?;

        Ok(value.strip_prefix(BEARER_PREFIX).unwrap_or(value))
    }
}

impl Stage for TokenVerifier {
    fn name(&self) -> &'static str {
        "token_verifier"
    }

    fn process(&self, parts: &mut Parts) -> Result<(), AuthError> {
        let claims = self.verifier.verify(Self::extract_token(parts)?)?;
        parts.extensions.insert(claims);
        Ok(())
    }
}

/// Extractor for the claims attached by [`TokenVerifier`].
///
/// Only usable on routes behind a pipeline that verifies tokens; elsewhere
/// it rejects with [`AuthError::Unauthenticated`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn subject(&self) -> Option<&str> {
        self.0.sub.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.0.role()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or(AuthError::Unauthenticated)
    }
}
