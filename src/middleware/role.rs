//! Role allow-list checks.

use std::collections::BTreeSet;

use axum::http::request::Parts;

use gatekeeper_auth::{AuthError, Claims};

use crate::middleware::pipeline::Stage;

/// Pipeline stage that admits a request only when the claims attached by an
/// earlier [`TokenVerifier`](crate::middleware::auth::TokenVerifier) carry
/// one of the permitted roles.
///
/// The role set is fixed when the route is registered. Matching is exact
/// and case-sensitive. A claim without a role never matches.
#[derive(Debug, Clone)]
pub struct RoleGate {
    allowed: BTreeSet<String>,
}

impl RoleGate {
    pub fn new<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            allowed: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed_roles(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// Checks `claims` against the allow-list.
    pub fn check(&self, claims: Option<&Claims>) -> Result<(), AuthError> {
        let claims = claims.ok_or(AuthError::Unauthenticated)?;

        match claims.role() {
            Some(role) if self.allowed.contains(role) => Ok(()),
            _ => Err(AuthError::InsufficientPermissions),
        }
    }
}

impl Stage for RoleGate {
    fn name(&self) -> &'static str {
        "role_gate"
    }

    fn process(&self, parts: &mut Parts) -> Result<(), AuthError> {
        self.check(parts.extensions.get::<Claims>())
    }
}
