//! Contact form validation.
//!
//! Messages are acknowledged but never delivered anywhere; validation exists
//! so the visitor gets useful feedback on obviously incomplete input.

use serde::Deserialize;

use crate::types::{Email, EmailError};

/// Maximum length of the sender name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Maximum length of the message body, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Errors found while validating a contact message.
///
/// The display strings are shown to visitors as-is.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Name must be at most {max} characters.")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    #[error("Please enter a valid email address.")]
    InvalidEmail(#[source] EmailError),
    #[error("Please enter a message.")]
    MissingMessage,
    #[error("Message must be at most {max} characters.")]
    MessageTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

/// Contact form fields exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub message: String,
}

impl ContactMessage {
    /// Validate raw form input, trimming every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContactError`] found, checking name, email and
    /// message in that order.
    pub fn parse(raw: &RawContactMessage) -> Result<Self, ContactError> {
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ContactError::NameTooLong {
                max: MAX_NAME_CHARS,
            });
        }

        let email = Email::parse(&raw.email).map_err(ContactError::InvalidEmail)?;

        let message = raw.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactError::MessageTooLong {
                max: MAX_MESSAGE_CHARS,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            email,
            message: message.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(name: &str, email: &str, message: &str) -> RawContactMessage {
        RawContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        let msg = ContactMessage::parse(&raw(" Ada ", "ada@example.com", " Hi! ")).unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email.as_str(), "ada@example.com");
        assert_eq!(msg.message, "Hi!");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ContactMessage::parse(&raw("", "ada@example.com", "Hi")),
            Err(ContactError::MissingName)
        );
        assert!(matches!(
            ContactMessage::parse(&raw("Ada", "ada", "Hi")),
            Err(ContactError::InvalidEmail(_))
        ));
        assert_eq!(
            ContactMessage::parse(&raw("Ada", "ada@example.com", "  ")),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn test_length_limits() {
        let long_name = "n".repeat(MAX_NAME_CHARS + 1);
        assert_eq!(
            ContactMessage::parse(&raw(&long_name, "ada@example.com", "Hi")),
            Err(ContactError::NameTooLong {
                max: MAX_NAME_CHARS
            })
        );

        let long_message = "m".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            ContactMessage::parse(&raw("Ada", "ada@example.com", &long_message)),
            Err(ContactError::MessageTooLong {
                max: MAX_MESSAGE_CHARS
            })
        );
    }
}
