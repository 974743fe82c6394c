// src/handlers/health.rs
// DOCUMENTATION: Service metadata and health check handlers
// PURPOSE: Simple endpoints to discover the API and verify service status

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub const SERVICE_NAME: &str = "Ayodhya Guide API";

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to Ayodhya Guide API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "places": "/api/places",
            "search": "/api/search",
            "categories": "/api/categories",
            "contact": "/api/contact"
        }
    }))
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}
