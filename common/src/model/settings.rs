use serde::{Deserialize, Serialize};

use crate::serde_helpers::i64_or_string;

/// Suffix appended to the app name in the browser title.
pub const TITLE_SUFFIX: &str = "Solutions Solaires";

/// Branding and contact settings managed from the back-office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    #[serde(deserialize_with = "i64_or_string")]
    pub id: i64,
    pub app_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<String>,
}

impl SystemSettings {
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.app_name, TITLE_SUFFIX)
    }

    /// CSS custom properties to set on the document root.
    pub fn css_variables(&self) -> [(&'static str, &str); 2] {
        [
            ("--color-primary", self.primary_color.as_str()),
            ("--color-secondary", self.secondary_color.as_str()),
        ]
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .filter(|hex| hex.len() == 3 || hex.len() == 6)
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_title_and_css_variables() {
        let settings: SystemSettings = serde_json::from_str(
            r##"{"id":"1","appName":"Lynays","primaryColor":"#16a34a","secondaryColor":"#facc15"}"##,
        )
        .expect("decode");
        assert_eq!(settings.document_title(), "Lynays - Solutions Solaires");
        assert_eq!(settings.css_variables()[0], ("--color-primary", "#16a34a"));
    }

    #[test]
    fn update_body_omits_timestamps() {
        let settings = SystemSettings {
            id: 1,
            app_name: "Lynays".into(),
            primary_color: "#000".into(),
            secondary_color: "#fff".into(),
            contact_email: String::new(),
            contact_phone: String::new(),
            created_at: Some("2025-01-01".into()),
            updated_at: None,
        };
        let json = serde_json::to_value(&settings).expect("encode");
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["appName"], "Lynays");
    }

    #[test]
    fn recognises_hex_colors() {
        assert!(is_hex_color("#16a34a"));
        assert!(is_hex_color("#FFF"));
        assert!(!is_hex_color("16a34a"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#ggg"));
    }
}
