// src/handlers/contact.rs
// DOCUMENTATION: Contact form handler
// PURPOSE: Accept contact submissions from the website

use crate::errors::GuideError;
use crate::models::ContactMessage;
use crate::services::ContactService;
use actix_web::{web, HttpResponse, Responder};

/// POST /api/contact
pub async fn submit_contact(
    req: web::Json<ContactMessage>,
) -> Result<impl Responder, GuideError> {
    let ack = ContactService::submit(req.into_inner())?;
    Ok(HttpResponse::Ok().json(ack))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/contact", web::post().to(submit_contact));
}
