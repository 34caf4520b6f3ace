//! Token-based authentication service.

use tracing::debug;

use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, TokenError};
use crate::services::token::TokenCodec;

/// Identity established from a validated token.
///
/// Carries no permission or role semantics: a valid token establishes
/// who the caller is, nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    /// Subject the token was issued to
    pub subject: String,
    /// Token ID, useful for request correlation in logs
    pub token_id: String,
    /// Full claims embedded in the token
    pub claims: Claims,
}

/// Authenticates bearer tokens against a configured codec.
///
/// Constructed once at startup and shared by reference; the codec inside
/// is immutable, so the authenticator is freely usable across threads.
pub struct Authenticator {
    codec: TokenCodec,
}

impl Authenticator {
    /// Creates an authenticator around the given codec.
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Validates a token and maps its claims to an identity.
    ///
    /// # Errors
    ///
    /// * `AuthError::MissingToken` - the presented token is empty
    /// * `AuthError::InvalidToken` - malformed, forged, or expired token
    pub fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        match self.codec.decode(token) {
            Ok(claims) => {
                debug!(subject = %claims.sub, token_id = %claims.jti, "token authenticated");
                Ok(Identity {
                    subject: claims.sub.clone(),
                    token_id: claims.jti.clone(),
                    claims,
                })
            }
            Err(e) => {
                debug!(reason = %e, "token rejected");
                Err(AuthError::InvalidToken(e))
            }
        }
    }

    /// Access to the underlying codec, for issuing tokens from the same
    /// secret the authenticator verifies against.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}
