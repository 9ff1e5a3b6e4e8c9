use std::env;
use std::fmt;

/// Secret used when `JWT_SECRET` is not set. Known to everyone who has read
/// this file, so it must be overridden in any real deployment.
pub const INSECURE_DEFAULT_SECRET: &str = "supersecretkey";

/// Upper bound for `JWT_LEEWAY_SECS`. Larger values are clamped to it.
pub const MAX_LEEWAY_SECS: u64 = 86_400;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Clock skew tolerated when checking `exp` and `nbf`, in seconds.
    /// Verification never applies more than [`MAX_LEEWAY_SECS`].
    pub leeway_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            leeway_secs: 0,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("JWT_SECRET")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| INSECURE_DEFAULT_SECRET.to_string()),
            leeway_secs: lookup("JWT_LEEWAY_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .map(|secs| secs.min(MAX_LEEWAY_SECS))
                .unwrap_or(0),
        }
    }

    /// Leeway as applied during verification.
    pub fn effective_leeway_secs(&self) -> u64 {
        self.leeway_secs.min(MAX_LEEWAY_SECS)
    }

    /// True when the built-in fallback secret is in effect.
    pub fn uses_insecure_default(&self) -> bool {
        self.secret == INSECURE_DEFAULT_SECRET
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}
