//! Configuration for the token codec

use jsonwebtoken::Algorithm;

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// Signing secret shared by every codec that cross-verifies tokens
    pub secret: String,
    /// Symmetric signing algorithm (HS256, HS384, or HS512)
    pub algorithm: Algorithm,
    /// Clock-skew tolerance in seconds applied when comparing expiry
    pub leeway_secs: u64,
}

impl TokenCodecConfig {
    /// Creates a configuration with the given secret and the defaults
    /// for everything else.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Sets the clock-skew tolerance in seconds.
    pub fn with_leeway_secs(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    /// Sets the signing algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            leeway_secs: 0,
        }
    }
}
