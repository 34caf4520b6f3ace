use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use chrono::Duration;
use dotenv::dotenv;
use log::info;

use ag_api::config::AppConfig;
use ag_api::middleware::TokenAuth;
use ag_api::routes::{self, AppState};
use ag_core::{Authenticator, TokenCodec};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AuthGate API Server");

    let config = AppConfig::from_env();
    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Build the codec and authenticator once; every worker shares them
    let codec = TokenCodec::new(config.token_codec_config())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let authenticator = Arc::new(Authenticator::new(codec));
    let state = web::Data::new(AppState::new(
        Arc::clone(&authenticator),
        Duration::seconds(config.token_ttl_seconds),
    ));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            // Anonymous endpoints
            .route("/health", web::get().to(routes::health::health_check))
            .route("/authorize", web::post().to(routes::auth::authorize))
            // Token-gated endpoints
            .service(
                web::scope("")
                    .wrap(TokenAuth::new(Arc::clone(&authenticator)))
                    .route("/verify", web::get().to(routes::protected::verify))
                    .route("/success", web::get().to(routes::protected::success)),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
