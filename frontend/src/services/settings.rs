use common::error::ApiError;
use common::model::settings::SystemSettings;
use common::session::Session;
use gloo_net::http::Request;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::http::{authorized, fetch_data};
use crate::config::api;

pub async fn load() -> Result<SystemSettings, ApiError> {
    let request = Request::get(&api().system_settings())
        .header("Accept", "application/json")
        .build();
    fetch_data(request, "Impossible de charger les paramètres").await
}

pub async fn save(settings: &SystemSettings, session: &Session) -> Result<SystemSettings, ApiError> {
    let request = authorized(Request::put(&api().system_settings()), session).json(settings);
    fetch_data(request, "Impossible d'enregistrer les paramètres").await
}

/// Pushes the brand colors onto the document root and renames the tab.
pub fn apply(settings: &SystemSettings) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(&settings.document_title());
    let Some(root) = document
        .document_element()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    for (name, value) in settings.css_variables() {
        if style.set_property(name, value).is_err() {
            warn!("could not set {name}");
        }
    }
}
