//! # AuthGate Core
//!
//! Core domain layer for the AuthGate service. This crate contains the
//! claims entity, the token codec, the authenticator seam used by the
//! HTTP layer, and the error types shared across the workspace.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::Claims;
pub use errors::{AuthError, TokenError};
pub use services::auth::{Authenticator, Identity};
pub use services::token::{TokenCodec, TokenCodecConfig};
