//! Authentication seam between the token codec and the request pipeline.
//!
//! Exposes a plain `authenticate(token) -> Result<Identity, AuthError>`
//! surface that any middleware chain can compose, with no coupling to a
//! particular web framework.

mod service;

pub use service::{Authenticator, Identity};
