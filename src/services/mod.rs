// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod cache;
pub mod catalog_loader;
pub mod contact_service;
pub mod place_service;

pub use cache::*;
pub use catalog_loader::*;
pub use contact_service::*;
pub use place_service::*;
