use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::{Json, Router, routing::get};
use chrono::Utc;
use gatekeeper::middleware::auth::AuthUser;
use gatekeeper::middleware::pipeline::{Pipeline, guard};
use gatekeeper::router::init_router;
use gatekeeper::state::AppState;
use gatekeeper_config::{CorsConfig, JwtConfig};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

#[allow(dead_code)]
pub fn test_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::new(TEST_SECRET),
        cors_config: CorsConfig::from_list("http://localhost:3000"),
    }
}

#[allow(dead_code)]
pub fn setup_test_app() -> Router {
    init_router(test_state())
}

/// Signs `claims` with `secret` (HS256).
#[allow(dead_code)]
pub fn mint_token(claims: &Value, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// A valid, unexpired token for `role`.
#[allow(dead_code)]
pub fn token_for_role(role: &str) -> String {
    mint_token(
        &json!({
            "sub": "user-123",
            "role": role,
            "iat": Utc::now().timestamp(),
            "exp": Utc::now().timestamp() + 3600,
        }),
        TEST_SECRET,
    )
}

#[allow(dead_code)]
async fn whoami(AuthUser(claims): AuthUser) -> Json<Value> {
    Json(json!({ "sub": claims.sub, "role": claims.role }))
}

/// Router with a token-only route and role-gated routes, mounted the way an
/// application would mount them.
#[allow(dead_code)]
pub fn setup_protected_app() -> Router {
    let state = test_state();

    let authenticated = guard(
        Router::new().route("/me", get(whoami)),
        Pipeline::authenticated(&state.jwt_config),
    );
    let admin = guard(
        Router::new().route("/admin", get(whoami)),
        Pipeline::with_roles(&state.jwt_config, ["admin"]),
    );
    let staff = guard(
        Router::new().route("/staff", get(whoami)),
        Pipeline::with_roles(&state.jwt_config, ["admin", "editor"]),
    );

    Router::new()
        .merge(authenticated)
        .merge(admin)
        .merge(staff)
        .with_state(state)
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_with_auth(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Sends one request and returns the status plus the parsed JSON body.
#[allow(dead_code)]
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}
