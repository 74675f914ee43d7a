//! Backend URL, baked in at compile time from `LYNAYS_API_URL`.

use std::sync::OnceLock;

use common::config::ApiConfig;

static API: OnceLock<ApiConfig> = OnceLock::new();

/// Endpoints of the REST backend.
pub fn api() -> &'static ApiConfig {
    API.get_or_init(|| ApiConfig::from_env_value(option_env!("LYNAYS_API_URL")))
}
