mod web;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use affpress::common::AppConfig;

use web::middleware::SecurityHeaders;
use web::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::load().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let bind_addr = config.bind_addr.clone();
    let api_url = config.api_url.clone();
    let state = AppState::new(config).map_err(std::io::Error::other)?;
    let state = Data::new(state);

    log::info!("Serving on {} against backend {}", bind_addr, api_url);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders::new(&api_url))
            .wrap(Logger::default())
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .service(Files::new("/pkg", "./pkg").prefer_utf8(true))
            .configure(web::handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
