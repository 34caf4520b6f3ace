//! Token-gated endpoints.
//!
//! Both handlers sit behind the authentication middleware; by the time
//! they run, the request carries an established identity.

use actix_web::HttpResponse;
use log::info;

use crate::middleware::AuthContext;

/// Handler for GET /verify
///
/// Confirms the presented token and echoes the authenticated subject.
pub async fn verify(auth: AuthContext) -> HttpResponse {
    info!("verified token for subject {}", auth.subject);
    HttpResponse::Ok().json(serde_json::json!({
        "subject": auth.subject,
        "token_id": auth.token_id,
    }))
}

/// Handler for GET /success
///
/// Sample protected resource.
pub async fn success(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().body(format!("test success, welcome {}", auth.subject))
}
