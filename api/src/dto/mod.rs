//! Request and response data transfer objects.

pub mod auth;
pub mod error;

pub use auth::{AuthorizeRequest, TokenResponse};
pub use error::ErrorResponse;
