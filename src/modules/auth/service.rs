use tracing::{debug, instrument};

use super::model::{LoginRequest, LoginResponse, MOCK_TOKEN, MessageResponse, RegisterRequest};

/// Stand-in for a real credential store and token issuer.
///
/// Nothing is persisted, passwords are never checked, and every login is
/// answered with the same placeholder token.
pub struct AuthService;

impl AuthService {
    #[instrument(skip_all)]
    pub fn register_user(dto: &RegisterRequest) -> MessageResponse {
        debug!(email = dto.email.as_deref().unwrap_or_default(), "Registering user");
        MessageResponse {
            message: "User registered successfully".to_string(),
        }
    }

    #[instrument(skip_all)]
    pub fn login_user(dto: &LoginRequest) -> LoginResponse {
        debug!(email = dto.email.as_deref().unwrap_or_default(), "User login");
        LoginResponse {
            message: "Login successful".to_string(),
            token: MOCK_TOKEN.to_string(),
        }
    }
}
