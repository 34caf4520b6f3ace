//! Token codec module for signed bearer tokens.
//!
//! This module handles stateless token issuance and verification:
//! - claim-bearing token issuance with a caller-chosen TTL
//! - single-pass decode-and-validate returning the embedded claims
//! - a boolean verification gate for request filtering

mod codec;
mod config;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenCodecConfig;
