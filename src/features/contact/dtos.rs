use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Notification shown while a submission is in flight
pub const SENDING_MESSAGE: &str = "Sending...";

/// Message returned for, and shown after, an accepted submission
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your submission! We will get back to you shortly.";

/// Contact form fields, sent as `multipart/form-data`.
///
/// The same constraints apply before the form leaves the browser and when
/// the server receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactFormDto {
    #[validate(length(min = 1, max = 128, message = "Name is required (max 128 characters)"))]
    pub name: String,

    #[validate(
        length(max = 32, message = "Phone must not exceed 32 characters"),
        regex(
            path = "*crate::shared::validation::PHONE_REGEX",
            message = "Only numbers, spaces and these symbols are allowed: ( ) + -"
        )
    )]
    pub phone: String,

    #[validate(
        length(max = 254, message = "Email must not exceed 254 characters"),
        regex(
            path = "*crate::shared::validation::EMAIL_REGEX",
            message = "Email (Format: example@test.com)"
        )
    )]
    pub email: String,

    /// Free-form, multi-line
    #[validate(length(min = 1, max = 5000, message = "Message is required (max 5000 characters)"))]
    pub message: String,
}

/// Response DTO for an accepted submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponseDto {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactFormDto {
        ContactFormDto {
            name: "Ada Lovelace".to_string(),
            phone: "+44 (20) 7946-0000".to_string(),
            email: "ada@example.com".to_string(),
            message: "We'd like to talk about\na smart contract audit.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let form = ContactFormDto {
            name: String::new(),
            message: String::new(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("message"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_phone_and_email_patterns() {
        let form = ContactFormDto {
            phone: "555.1234".to_string(),
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("email"));

        let empty_phone = ContactFormDto {
            phone: String::new(),
            ..valid_form()
        };
        assert!(empty_phone.validate().is_err());
    }
}
