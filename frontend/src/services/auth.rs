use common::error::ApiError;
use common::requests::{LoginData, LoginRequest};
use common::session::Session;
use gloo_net::http::Request;
use log::warn;

use super::http::{authorized, fetch_data, fetch_unit};
use crate::config::api;

pub async fn login(email: String, password: String) -> Result<LoginData, ApiError> {
    let body = LoginRequest { email, password };
    let request = Request::post(&api().login())
        .header("Accept", "application/json")
        .json(&body);
    let fallback = "Identifiants invalides";
    fetch_data(request, fallback).await.map_err(|err| match err {
        ApiError::Unauthorized => ApiError::Http {
            status: 401,
            message: fallback.to_string(),
            errors: None,
        },
        other => other,
    })
}

/// Exchanges the current token for a fresh one.
pub async fn refresh(session: &Session) -> Result<LoginData, ApiError> {
    let request = authorized(Request::post(&api().refresh()), session).build();
    fetch_data(request, "Session expirée").await
}

/// Best effort: the local session is cleared whatever the backend answers.
pub async fn logout(session: &Session) {
    let request = authorized(Request::post(&api().logout()), session).build();
    if let Err(err) = fetch_unit(request, "Déconnexion impossible").await {
        warn!("logout: {err}");
    }
}
