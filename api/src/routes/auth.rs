//! Token issuance endpoint.

use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde_json::{json, Map};
use validator::Validate;

use crate::dto::{AuthorizeRequest, ErrorResponse, TokenResponse};

use super::AppState;

/// Handler for POST /authorize
///
/// Issues a signed bearer token with the username as subject. Credential
/// verification beyond shape validation is not part of this service; a
/// valid token only establishes who asked for it.
///
/// # Responses
///
/// - 200: `{"token": "...", "expires_in": 3600}`
/// - 400: empty or oversized username/password
/// - 500: token signing failed
pub async fn authorize(
    state: web::Data<AppState>,
    request: web::Json<AuthorizeRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            format!("Invalid request data: {}", errors),
        ));
    }

    let mut claims = Map::new();
    claims.insert("username".to_string(), json!(request.username));

    match state
        .authenticator
        .codec()
        .issue(&request.username, state.token_ttl, claims)
    {
        Ok(token) => {
            info!("issued token for subject {}", request.username);
            HttpResponse::Ok().json(TokenResponse {
                token,
                expires_in: state.token_ttl.num_seconds(),
            })
        }
        Err(e) => {
            warn!("token issuance failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "token_generation_failed",
                "Could not issue a token",
            ))
        }
    }
}
