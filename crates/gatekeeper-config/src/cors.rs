use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

        Self::from_list(&allowed_origins)
    }

    /// Parses a comma separated origin list, dropping blanks.
    pub fn from_list(origins: &str) -> Self {
        let allowed_origins = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list_trims_and_skips_blanks() {
        let config = CorsConfig::from_list(" http://a.test , ,http://b.test,");
        assert_eq!(
            config.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
