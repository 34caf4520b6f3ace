//! HTTP middleware for the API layer.

pub mod auth;

pub use auth::{AuthContext, TokenAuth};
