//! DTOs for the token issuance endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /authorize
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthorizeRequest {
    /// Username used as the token subject
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,

    /// Password; only shape-checked, credential verification is not
    /// part of this service
    #[validate(length(min = 1, max = 128, message = "password must be 1-128 characters"))]
    pub password: String,
}

/// Response body for a successfully issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed bearer token
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_request_validation() {
        let valid = AuthorizeRequest {
            username: "xfg".to_string(),
            password: "123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_username = AuthorizeRequest {
            username: String::new(),
            password: "123".to_string(),
        };
        assert!(empty_username.validate().is_err());

        let empty_password = AuthorizeRequest {
            username: "xfg".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }
}
