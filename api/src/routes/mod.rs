//! HTTP route handlers.

pub mod auth;
pub mod health;
pub mod protected;

use std::sync::Arc;

use ag_core::Authenticator;
use chrono::Duration;

/// Shared application state handed to the handlers.
///
/// The authenticator is built once at startup and shared by reference;
/// there is no global singleton to mutate.
#[derive(Clone)]
pub struct AppState {
    /// Authenticator wrapping the token codec
    pub authenticator: Arc<Authenticator>,
    /// Lifetime of tokens issued by /authorize
    pub token_ttl: Duration,
}

impl AppState {
    /// Creates the application state.
    pub fn new(authenticator: Arc<Authenticator>, token_ttl: Duration) -> Self {
        Self {
            authenticator,
            token_ttl,
        }
    }
}
