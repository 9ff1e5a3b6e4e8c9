//! # Gatekeeper API
//!
//! A small Axum service with two unauthenticated routes, register and login,
//! guarded by request-body validation, plus a reusable two-stage
//! authorization pipeline for everything else.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Authorization pipeline and its stages
//! ├── modules/
//! │   └── auth/        # Register and login (stub handlers)
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Request logging and subscriber setup
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! The feature module follows the usual layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic
//! - `model.rs`: Request and response DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Authorization Pipeline
//!
//! Protected routes run an ordered list of stages before their handler:
//!
//! ```text
//! request ─▶ TokenVerifier ─▶ RoleGate(allowed roles) ─▶ handler
//!               │                  │
//!               ├─ 401 Missing token
//!               └─ 403 Invalid or expired token
//!                                  └─ 403 Forbidden: Insufficient Permissions
//! ```
//!
//! Stages are attached per route with [`middleware::pipeline::guard`]:
//!
//! ```ignore
//! use gatekeeper::middleware::pipeline::{Pipeline, guard};
//!
//! let admin = guard(
//!     Router::new().route("/admin/stats", get(stats)),
//!     Pipeline::with_roles(&state.jwt_config, ["admin"]),
//! );
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key   # falls back to an insecure default
//! JWT_LEEWAY_SECS=0
//! HOST=0.0.0.0
//! PORT=3000
//! ALLOWED_ORIGINS=http://localhost:3000,http://localhost:5173
//! LOG_LEVEL=info
//! LOG_FORMAT=compact                  # or json
//! ```
//!
//! ## Security Considerations
//!
//! - The login route is a placeholder and returns a fixed token
//! - `JWT_SECRET` must be set in any real deployment; a warning is logged
//!   at startup when the fallback is in use
//! - Malformed, expired, and wrongly signed tokens are indistinguishable to
//!   clients

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use gatekeeper_auth;
pub use gatekeeper_config;
pub use gatekeeper_core;
