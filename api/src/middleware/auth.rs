//! Token authentication middleware protecting gated endpoints.
//!
//! The middleware extracts the bearer token from the Authorization
//! header (falling back to the `token` query parameter), validates it
//! through the core authenticator, and injects the established identity
//! into the request extensions. Requests without a valid token are
//! rejected with 401 before they reach application logic; no validation
//! detail is exposed to the caller.

use std::{
    collections::HashMap,
    fmt,
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    http::StatusCode,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use log::debug;

use ag_core::Authenticator;

use crate::dto::ErrorResponse;

/// Authentication context injected into gated requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject the token was issued to
    pub subject: String,
    /// Token ID for request correlation
    pub token_id: String,
}

/// Token authentication middleware factory
pub struct TokenAuth {
    authenticator: Arc<Authenticator>,
}

impl TokenAuth {
    /// Creates the middleware around a shared authenticator.
    pub fn new(authenticator: Arc<Authenticator>) -> Self {
        Self { authenticator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
            authenticator: Arc::clone(&self.authenticator),
        }))
    }
}

/// Token authentication middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
    authenticator: Arc<Authenticator>,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticator = Arc::clone(&self.authenticator);

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    debug!("rejecting request without token: {}", req.path());
                    let res = Unauthorized.error_response().map_into_right_body();
                    return Ok(req.into_response(res));
                }
            };

            // Fail closed: the caller only learns that the token was
            // rejected, never why
            let identity = match authenticator.authenticate(&token) {
                Ok(identity) => identity,
                Err(e) => {
                    debug!("rejecting request to {}: {}", req.path(), e);
                    let res = Unauthorized.error_response().map_into_right_body();
                    return Ok(req.into_response(res));
                }
            };

            req.extensions_mut().insert(AuthContext {
                subject: identity.subject,
                token_id: identity.token_id,
            });

            service
                .call(req)
                .await
                .map(|res| res.map_into_left_body())
        })
    }
}

/// Extracts the token from the Authorization header, falling back to
/// the `token` query parameter.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|s| s.to_string());

    bearer.or_else(|| {
        web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .ok()
            .and_then(|query| query.get("token").cloned())
    })
}

/// Rejection returned for any missing or invalid token.
#[derive(Debug)]
struct Unauthorized;

impl fmt::Display for Unauthorized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid or missing token")
    }
}

impl ResponseError for Unauthorized {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized()
            .json(ErrorResponse::new("unauthorized", "invalid or missing token"))
    }
}

/// Extractor for handlers behind the middleware
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
