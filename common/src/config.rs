//! Backend location and endpoint paths.

/// Base URL used when no override is configured at build time.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Where the REST backend lives, plus the paths of every resource the site uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env_value(None)
    }
}

impl ApiConfig {
    /// Builds the config from an optional override (typically `option_env!`).
    /// Blank values fall back to [`DEFAULT_API_URL`]; a trailing `/` is dropped.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let raw = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self {
            base_url: raw.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}/{}", self.base_url, suffix)
    }

    pub fn login(&self) -> String {
        self.path("auth/login")
    }

    pub fn refresh(&self) -> String {
        self.path("auth/refresh")
    }

    pub fn logout(&self) -> String {
        self.path("auth/logout")
    }

    pub fn collection_requests(&self) -> String {
        self.path("collection-requests")
    }

    pub fn collection_request(&self, id: &str) -> String {
        self.path(&format!("collection-requests/{id}"))
    }

    /// Message list, optionally filtered by status (e.g. `UNREAD`).
    pub fn contact_messages(&self, status: Option<&str>) -> String {
        match status {
            Some(status) => self.path(&format!("contact-messages?status={status}")),
            None => self.path("contact-messages"),
        }
    }

    pub fn contact_message(&self, id: &str) -> String {
        self.path(&format!("contact-messages/{id}"))
    }

    pub fn mark_message_read(&self, id: &str) -> String {
        self.path(&format!("contact-messages/{id}/mark-as-read"))
    }

    pub fn users(&self) -> String {
        self.path("users")
    }

    pub fn user(&self, id: &str) -> String {
        self.path(&format!("users/{id}"))
    }

    pub fn projects(&self) -> String {
        self.path("projects")
    }

    pub fn project(&self, id: i64) -> String {
        self.path(&format!("projects/{id}"))
    }

    pub fn system_settings(&self) -> String {
        self.path("system-settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_url_when_unset_or_blank() {
        assert_eq!(ApiConfig::from_env_value(None).base_url(), DEFAULT_API_URL);
        assert_eq!(ApiConfig::from_env_value(Some("  ")).base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn trims_trailing_slash_from_override() {
        let config = ApiConfig::from_env_value(Some("https://api.example.ci/api/"));
        assert_eq!(config.collection_requests(), "https://api.example.ci/api/collection-requests");
        assert_eq!(
            config.collection_request("abc"),
            "https://api.example.ci/api/collection-requests/abc"
        );
    }

    #[test]
    fn builds_filtered_message_url() {
        let config = ApiConfig::default();
        assert_eq!(
            config.contact_messages(Some("UNREAD")),
            "http://127.0.0.1:8000/api/contact-messages?status=UNREAD"
        );
        assert_eq!(
            config.mark_message_read("7"),
            "http://127.0.0.1:8000/api/contact-messages/7/mark-as-read"
        );
    }
}
