//! Business services containing the domain logic.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::{Authenticator, Identity};
pub use token::{TokenCodec, TokenCodecConfig};
