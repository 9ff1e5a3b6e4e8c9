use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            MessageResponse,
            LoginResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login")
    ),
    info(
        title = "Gatekeeper API",
        version = "0.1.0",
        description = "Request validation and bearer-token authorization for an Axum service.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
