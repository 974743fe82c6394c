// src/services/contact_service.rs
// DOCUMENTATION: Contact form intake
// PURPOSE: Validate a submission and hand it to the log, the only sink there is

use crate::errors::GuideError;
use crate::models::{ContactAcknowledgement, ContactMessage};
use uuid::Uuid;
use validator::Validate;

pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

pub struct ContactService;

impl ContactService {
    /// Validate and log a contact message, echoing it back
    pub fn submit(contact: ContactMessage) -> Result<ContactAcknowledgement, GuideError> {
        if let Err(e) = contact.validate() {
            return Err(GuideError::ValidationError(e.to_string()));
        }

        let reference = Uuid::new_v4();
        log::info!(
            "Contact form submitted [{}]: name={:?} email={:?} subject={:?} message={:?}",
            reference,
            contact.name,
            contact.email,
            contact.subject.as_deref().unwrap_or(""),
            contact.message
        );

        Ok(ContactAcknowledgement {
            message: THANK_YOU_MESSAGE.to_string(),
            status: "success".to_string(),
            data: contact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            subject: Some("Guided tour".to_string()),
            message: "Do you offer guided tours during Deepotsav?".to_string(),
        }
    }

    #[test]
    fn test_submit_echoes_fields() {
        let ack = ContactService::submit(contact()).unwrap();

        assert_eq!(ack.status, "success");
        assert_eq!(ack.message, THANK_YOU_MESSAGE);
        assert_eq!(ack.data, contact());
    }

    #[test]
    fn test_submit_rejects_empty_name() {
        let mut invalid = contact();
        invalid.name = String::new();

        assert!(matches!(
            ContactService::submit(invalid),
            Err(GuideError::ValidationError(_))
        ));
    }
}
