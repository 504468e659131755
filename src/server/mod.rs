pub mod handlers;

use crate::{config::Config, upstream::ImageGenerator};
use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use std::sync::Arc;

/// Run the proxy server until shutdown. Each request is handled
/// independently; the adapter is the only shared state and it is immutable.
pub async fn run(config: Config, generator: Arc<dyn ImageGenerator>) -> std::io::Result<()> {
    let port = config.port;
    let frontend_url = config.frontend_url.clone();

    log::info!("🚀 Server running on port {}", port);
    log::info!("CORS allowed: {}", frontend_url);
    log::info!("Upstream adapter: {}", generator.name());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&frontend_url)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE]);

        App::new()
            .app_data(web::Data::from(generator.clone()))
            .wrap(cors)
            .route("/generate", web::post().to(handlers::generate))
            .route("/health", web::get().to(handlers::health))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
