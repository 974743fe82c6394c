// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, check the catalog, start HTTP server

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use ayodhya_guide_api::config::Config;
use ayodhya_guide_api::errors::json_error_handler;
use ayodhya_guide_api::handlers;
use ayodhya_guide_api::services::{CatalogLoader, CatalogReport};
use dotenv::dotenv;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level: &str = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting Ayodhya Guide API...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Catalog loader, checked once so data problems show up at boot
    let loader = web::Data::new(CatalogLoader::from_config(&config));
    match loader.try_load().await {
        Ok(places) => {
            let report = CatalogReport::inspect(&places);
            if report.is_clean() {
                log::info!("Catalog integrity check passed");
            } else {
                report.log();
            }
            log::info!(
                "Catalog: {} places from {}",
                places.len(),
                loader
                    .resolve_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default()
            );
        }
        Err(e) => log::warn!("Catalog unavailable, serving empty results: {}", e),
    }
    if config.catalog_cache_ttl > 0 {
        log::info!("Catalog cache enabled (TTL: {}s)", config.catalog_cache_ttl);
    }

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (catalog loader and config)
            .app_data(loader.clone())
            .app_data(config_data.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            // Middleware
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::configure)
    })
    .bind(&server_addr)?
    .run()
    .await
}
