use gatekeeper_config::{CorsConfig, JwtConfig};

/// Read-only configuration shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
