//! Request authorization middleware.
//!
//! Authorization is modelled as an ordered [`Pipeline`](pipeline::Pipeline)
//! of [`Stage`](pipeline::Stage)s. Each stage inspects the request head and
//! either lets it continue or terminates it with an error response.
//!
//! # Modules
//!
//! - [`pipeline`]: The stage trait, the pipeline runner, and [`guard`](pipeline::guard)
//! - [`auth`]: Bearer token verification and the [`AuthUser`](auth::AuthUser) extractor
//! - [`role`]: Role allow-list checks
//!
//! # Authorization Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. [`TokenVerifier`](auth::TokenVerifier) verifies the token and attaches its claims
//! 3. [`RoleGate`](role::RoleGate) checks the attached role against the route's allow-list
//! 4. Handler executes if every stage passes
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::pipeline::{Pipeline, guard};
//!
//! let reports = guard(
//!     Router::new().route("/reports", get(list_reports)),
//!     Pipeline::with_roles(&state.jwt_config, ["admin", "auditor"]),
//! );
//! ```

pub mod auth;
pub mod pipeline;
pub mod role;
