//! # AuthGate API
//!
//! HTTP surface for the AuthGate service: token issuance endpoint,
//! token-gated routes, and the authentication middleware connecting
//! them to the core authenticator.

pub mod config;
pub mod dto;
pub mod middleware;
pub mod routes;
