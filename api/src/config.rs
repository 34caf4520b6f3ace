//! Application configuration loaded from the environment.

use std::env;

use ag_core::TokenCodecConfig;
use jsonwebtoken::Algorithm;

/// Server and token configuration.
///
/// Every value has a development default; production deployments are
/// expected to set at least `JWT_SECRET`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host the HTTP server binds to
    pub host: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Shared token-signing secret
    pub jwt_secret: String,
    /// Signing algorithm name (HS256, HS384, or HS512)
    pub jwt_algorithm: String,
    /// Lifetime of issued tokens in seconds
    pub token_ttl_seconds: i64,
    /// Clock-skew tolerance in seconds when checking expiry
    pub token_leeway_seconds: u64,
}

impl AppConfig {
    /// Loads the configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string()),
            jwt_algorithm: env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()),
            token_ttl_seconds: env::var("TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            token_leeway_seconds: env::var("TOKEN_LEEWAY_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Address the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Maps this configuration onto the codec's.
    ///
    /// Unknown algorithm names fall back to HS256; the codec itself
    /// rejects anything outside the HMAC family.
    pub fn token_codec_config(&self) -> TokenCodecConfig {
        let algorithm = match self.jwt_algorithm.as_str() {
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            _ => Algorithm::HS256,
        };

        TokenCodecConfig::new(self.jwt_secret.clone())
            .with_algorithm(algorithm)
            .with_leeway_secs(self.token_leeway_seconds)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            jwt_algorithm: "HS256".to_string(),
            token_ttl_seconds: 3600,
            token_leeway_seconds: 0,
        }
    }
}
