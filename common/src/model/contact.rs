use serde::{Deserialize, Serialize};

use crate::serde_helpers::{bool_or_int, string_or_number};
use crate::validation::{ValidationError, is_valid_email};

/// Status value the backend uses for messages nobody has opened yet.
pub const UNREAD_STATUS: &str = "UNREAD";

/// Body of the public contact form (`POST contact-messages`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessagePayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessagePayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::MissingContactFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// A message received through the contact form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub is_read: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ContactMessage {
    /// The explicit status wins; `is_read` is only consulted when there is none.
    pub fn is_unread(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => status.eq_ignore_ascii_case(UNREAD_STATUS),
            None => !self.is_read,
        }
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
        self.status = Some("READ".to_string());
    }

    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.subject.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(status: Option<&str>, is_read: bool) -> ContactMessage {
        ContactMessage {
            id: "1".into(),
            name: "Koffi".into(),
            email: "koffi@example.ci".into(),
            subject: "Devis villa".into(),
            message: "Bonjour".into(),
            sent_at: None,
            is_read,
            status: status.map(str::to_string),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn status_takes_precedence_over_flag() {
        assert!(message(Some("UNREAD"), true).is_unread());
        assert!(!message(Some("READ"), false).is_unread());
        assert!(message(None, false).is_unread());
    }

    #[test]
    fn mark_read_clears_unread() {
        let mut msg = message(Some("UNREAD"), false);
        msg.mark_read();
        assert!(!msg.is_unread());
    }

    #[test]
    fn search_covers_subject() {
        assert!(message(None, false).matches("villa"));
        assert!(!message(None, false).matches("usine"));
    }

    #[test]
    fn payload_requires_every_field_and_valid_email() {
        let mut payload = ContactMessagePayload {
            name: "Koffi".into(),
            email: "koffi@example.ci".into(),
            subject: "Devis".into(),
            message: "Bonjour".into(),
        };
        assert_eq!(payload.validate(), Ok(()));
        payload.email = "koffi@example".into();
        assert_eq!(payload.validate(), Err(ValidationError::InvalidEmail));
        payload.subject = " ".into();
        assert_eq!(payload.validate(), Err(ValidationError::MissingContactFields));
    }

    #[test]
    fn decodes_integer_read_flag() {
        let msg: ContactMessage = serde_json::from_str(
            r#"{"id":3,"name":"A","email":"a@b.ci","subject":"s","message":"m","isRead":0,"status":null}"#,
        )
        .expect("decode");
        assert!(msg.is_unread());
    }
}
