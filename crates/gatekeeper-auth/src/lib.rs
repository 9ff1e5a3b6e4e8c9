//! # Gatekeeper Auth
//!
//! Identity claims and bearer-token verification for the Gatekeeper API.
//!
//! This crate provides:
//!
//! - [`claims`]: The decoded identity carried by a verified token
//! - [`error`]: The credential and permission failure taxonomy
//! - [`jwt`]: Signature and expiry verification
//!
//! Token issuance is not handled here; tokens are minted by an external issuer
//! sharing the configured secret.
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_auth::JwtVerifier;
//! use gatekeeper_config::JwtConfig;
//!
//! let verifier = JwtVerifier::new(&JwtConfig::from_env());
//! let claims = verifier.verify(token)?;
//! println!("role: {:?}", claims.role);
//! ```

pub mod claims;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use error::AuthError;
pub use jwt::{JwtVerifier, verify_token};
