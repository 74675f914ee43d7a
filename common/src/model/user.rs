use serde::{Deserialize, Serialize};

use crate::serde_helpers::string_or_number;
use crate::validation::{ValidationError, is_valid_email};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[default]
    Agent,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Admin, UserRole::Agent];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Agent => "AGENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrateur",
            UserRole::Agent => "Agent",
        }
    }

    pub fn from_str_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

/// A back-office account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
    }

    /// Up to two uppercase initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Body of `POST users` and `PUT users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserFormData {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

impl UserFormData {
    /// Pre-fills the edit form. Passwords are never echoed back.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            password: None,
            password_confirmation: None,
        }
    }

    /// The update payload: identity and role only.
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            password_confirmation: None,
            ..self.clone()
        }
    }

    /// Checks the form before it is sent. A new account needs a password.
    pub fn validate(&self, creating: bool) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ValidationError::MissingUserFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        let password = self.password.as_deref().unwrap_or_default();
        if creating && password.is_empty() {
            return Err(ValidationError::MissingUserFields);
        }
        if password != self.password_confirmation.as_deref().unwrap_or_default() {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UserFormData {
        UserFormData {
            name: "Awa Koné".into(),
            email: "awa@lynays.ci".into(),
            phone: None,
            role: UserRole::Agent,
            password: Some("secret123".into()),
            password_confirmation: Some("secret123".into()),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(form().validate(true), Ok(()));
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let mut data = form();
        data.password_confirmation = Some("other".into());
        assert_eq!(data.validate(true), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn creation_requires_password() {
        let mut data = form();
        data.password = None;
        data.password_confirmation = None;
        assert_eq!(data.validate(true), Err(ValidationError::MissingUserFields));
        assert_eq!(data.validate(false), Ok(()));
    }

    #[test]
    fn optional_fields_are_not_serialized_when_absent() {
        let mut data = form();
        data.password = None;
        data.password_confirmation = None;
        let json = serde_json::to_value(&data).expect("encode");
        assert_eq!(
            json,
            serde_json::json!({"name": "Awa Koné", "email": "awa@lynays.ci", "role": "AGENT"})
        );
    }

    #[test]
    fn edit_form_drops_passwords() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"name":"Awa Koné","email":"awa@lynays.ci","role":"ADMIN","phone":"0700"}"#,
        )
        .expect("decode");
        let mut data = UserFormData::from_user(&user);
        assert_eq!(data.role, UserRole::Admin);
        assert_eq!(data.phone.as_deref(), Some("0700"));
        assert_eq!(data.validate(false), Ok(()));

        data.password = Some("typed".into());
        data.password_confirmation = Some("typed".into());
        let json = serde_json::to_value(data.without_password()).expect("encode");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Awa Koné",
                "email": "awa@lynays.ci",
                "phone": "0700",
                "role": "ADMIN"
            })
        );
    }

    #[test]
    fn initials_take_first_two_words() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","name":"jean marc kouadio","email":"j@x.ci","role":"ADMIN"}"#,
        )
        .expect("decode");
        assert_eq!(user.initials(), "JM");
        assert!(user.matches("KOUADIO"));
    }
}
