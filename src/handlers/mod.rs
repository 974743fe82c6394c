// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and wire every route

pub mod contact;
pub mod health;
pub mod places;

use actix_web::web;

pub use contact::config as contact_config;
pub use health::config as health_config;
pub use places::config as places_config;

/// Register all routes, plus a JSON 404 for anything else
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health_config)
        .configure(places_config)
        .configure(contact_config)
        .default_service(web::to(crate::errors::not_found));
}
