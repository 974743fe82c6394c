//! Ayodhya Guide API - content service for the Ayodhya tourism guide
//!
//! Serves a read-only catalog of places loaded from a JSON file, with search,
//! category and featured views, and accepts contact-form submissions.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use errors::GuideError;
pub use models::{ContactMessage, Place};
pub use services::{CatalogLoader, PlaceService};
