//! Error taxonomy for token issuance, verification, and authentication.
//!
//! `verify` collapses every failure into a boolean gate; `issue` and
//! `decode` surface the specific kind so callers can log the cause.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Issuance called with an empty subject or non-positive TTL
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Input string is not parseable as a token of the expected shape
    #[error("Malformed token")]
    MalformedToken,

    /// Parseable, but the signature does not match the configured secret
    #[error("Invalid signature")]
    SignatureInvalid,

    /// Signature valid, but the token has expired
    #[error("Token expired")]
    Expired,

    /// Signing the payload failed
    #[error("Token generation failed")]
    GenerationFailed,
}

/// Authentication-seam errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No token was presented with the request
    #[error("Missing authentication token")]
    MissingToken,

    /// A token was presented but did not validate
    #[error(transparent)]
    InvalidToken(#[from] TokenError),
}
