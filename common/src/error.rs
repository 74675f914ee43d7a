//! Remote error type shared by every service call.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::requests::ErrorEnvelope;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Impossible de joindre le serveur: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Per-field validation errors, kept exactly as the backend sent them.
        errors: Option<Map<String, Value>>,
    },

    #[error("Réponse inattendue du serveur: {0}")]
    Decode(String),

    /// 401 from the backend: the session token is missing or expired.
    #[error("Session expirée, veuillez vous reconnecter.")]
    Unauthorized,
}

impl ApiError {
    /// The body is parsed as an [`ErrorEnvelope`]; if that fails or carries no
    /// message, `fallback` is used as the message.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let envelope = serde_json::from_str::<ErrorEnvelope>(body).unwrap_or_default();
        ApiError::Http {
            status,
            message: envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
            errors: envelope.errors.filter(|e| !e.is_empty()),
        }
    }

    pub fn field_errors(&self) -> Option<&Map<String, Value>> {
        match self {
            ApiError::Http { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }

    /// Text shown to the user in an alert.
    ///
    /// With a field map the map is rendered verbatim (pretty JSON) after a
    /// `Erreur de validation:` header; otherwise the error's own message.
    pub fn user_message(&self) -> String {
        match self.field_errors() {
            Some(errors) => {
                let rendered = serde_json::to_string_pretty(errors)
                    .unwrap_or_else(|_| format!("{errors:?}"));
                format!("Erreur de validation:\n{rendered}")
            }
            None => self.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_field_errors_verbatim() {
        let body = r#"{"message":"The given data was invalid.","errors":{"personalInfo.email":["The email must be valid."]}}"#;
        let err = ApiError::from_response(422, body, "Erreur lors de la sauvegarde");

        assert_eq!(err.to_string(), "The given data was invalid.");
        let errors = err.field_errors().expect("field errors");
        assert_eq!(
            errors["personalInfo.email"],
            serde_json::json!(["The email must be valid."])
        );
        let text = err.user_message();
        assert!(text.starts_with("Erreur de validation:\n"));
        assert!(text.contains("The email must be valid."));
    }

    #[test]
    fn uses_fallback_message_for_unparseable_body() {
        let err = ApiError::from_response(500, "<html>oops</html>", "Erreur lors de la sauvegarde");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "Erreur lors de la sauvegarde".into(),
                errors: None,
            }
        );
        assert_eq!(err.user_message(), "Erreur lors de la sauvegarde");
    }

    #[test]
    fn maps_401_to_unauthorized() {
        assert!(ApiError::from_response(401, "{}", "x").is_unauthorized());
    }
}
