use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::request::Parts,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tracing::debug;

use gatekeeper_auth::AuthError;
use gatekeeper_config::JwtConfig;

use crate::middleware::auth::TokenVerifier;
use crate::middleware::role::RoleGate;

/// One step of request authorization.
///
/// A stage sees the request head, including its extensions, which serve as
/// the per-request context. Returning `Ok(())` continues to the next stage;
/// an error terminates the request with that error's response.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(&self, parts: &mut Parts) -> Result<(), AuthError>;
}

/// An ordered list of stages, run first to last.
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to the end of the pipeline.
    pub fn stage<T>(mut self, stage: T) -> Self
    where
        T: Stage + 'static,
    {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Token verification only.
    pub fn authenticated(jwt_config: &JwtConfig) -> Self {
        Self::new().stage(TokenVerifier::new(jwt_config))
    }

    /// Token verification followed by a role allow-list.
    pub fn with_roles<I, R>(jwt_config: &JwtConfig, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self::authenticated(jwt_config).stage(RoleGate::new(roles))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage in order, stopping at the first failure.
    pub fn run(&self, parts: &mut Parts) -> Result<(), AuthError> {
        for stage in &self.stages {
            if let Err(err) = stage.process(parts) {
                debug!(
                    stage = stage.name(),
                    path = %parts.uri.path(),
                    error = %err,
                    "Request rejected"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Axum middleware that drives a [`Pipeline`] before the inner handler.
pub async fn run_pipeline(
    State(pipeline): State<Arc<Pipeline>>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Err(err) = pipeline.run(&mut parts) {
        return err.into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Protects every route currently registered on `router` with `pipeline`.
///
/// Routes added after this call are not covered.
pub fn guard<S>(router: Router<S>, pipeline: Pipeline) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(
        Arc::new(pipeline),
        run_pipeline,
    ))
}
