//! Bearer token verification.
//!
//! Tokens are HMAC-signed JWTs sharing the secret in [`JwtConfig`]. A token is
//! accepted when its signature matches, it parses, and any `exp`/`nbf` claims
//! it carries are satisfied. `exp` is not required. The audience is not
//! checked.
//!
//! Time claims are checked here rather than by `jsonwebtoken`, which only
//! understands integer timestamps and silently skips fractional ones.
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_auth::verify_token;
//! use gatekeeper_config::JwtConfig;
//!
//! let claims = verify_token(&token, &JwtConfig::from_env())?;
//! ```

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use gatekeeper_config::JwtConfig;

use crate::claims::Claims;
use crate::error::AuthError;

/// A decoding key plus validation rules, built once and shared read-only.
#[derive(Clone)]
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
    leeway_secs: u64,
}

impl JwtVerifier {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(jwt_config.secret.as_bytes()),
            validation,
            leeway_secs: jwt_config.effective_leeway_secs(),
        }
    }

    /// Verifies `token` and decodes its claims.
    ///
    /// Nothing is returned unless the signature and time checks all pass.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] if the token is malformed,
    /// wrongly signed, expired, or not yet valid.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidCredential)?;

        self.check_time(&claims, Utc::now().timestamp() as f64)?;
        Ok(claims)
    }

    /// Expired once `now >= exp + leeway`. Immature while `nbf > now + leeway`.
    fn check_time(&self, claims: &Claims, now: f64) -> Result<(), AuthError> {
        let leeway = self.leeway_secs as f64;

        if claims.exp.is_some_and(|exp| now >= exp + leeway) {
            return Err(AuthError::InvalidCredential);
        }
        if claims.nbf.is_some_and(|nbf| nbf > now + leeway) {
            return Err(AuthError::InvalidCredential);
        }
        Ok(())
    }
}

/// Verifies a token against `jwt_config` without keeping the verifier around.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    JwtVerifier::new(jwt_config).verify(token)
}
