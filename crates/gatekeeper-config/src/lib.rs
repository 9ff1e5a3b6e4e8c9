//! # Gatekeeper Config
//!
//! Configuration types for the Gatekeeper API.
//!
//! Each structure is built once at process start, usually from environment
//! variables, and then passed by value or reference into the components that
//! need it. Request handling never reads the environment directly.
//!
//! - [`jwt`]: Token verification configuration
//! - [`server`]: Listener host and port
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::{JwtConfig, MAX_LEEWAY_SECS};
pub use server::ServerConfig;
