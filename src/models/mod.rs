// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod contact;
pub mod place;

pub use contact::*;
pub use place::*;
