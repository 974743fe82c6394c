// src/models/contact.rs
// DOCUMENTATION: Contact form payloads
// PURPOSE: Request validation and acknowledgement body for POST /api/contact

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Submitted contact form
/// DOCUMENTATION: Only presence is checked, nothing is stored
/// Whitespace-only values count as missing, the same rule the catalog check uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(custom = "not_blank")]
    pub name: String,

    #[validate(custom = "not_blank")]
    pub email: String,

    #[serde(default)]
    pub subject: Option<String>,

    #[validate(custom = "not_blank")]
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Response of POST /api/contact
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactAcknowledgement {
    /// Fixed thank-you text
    pub message: String,
    pub status: String,
    /// The submitted message, unchanged
    pub data: ContactMessage,
}
