//! # Gatekeeper Core
//!
//! Core types shared by every Gatekeeper crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_core::AppError;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("email is required"));
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::AppError;
