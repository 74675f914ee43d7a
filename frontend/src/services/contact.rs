use common::error::ApiError;
use common::model::contact::{ContactMessage, ContactMessagePayload, UNREAD_STATUS};
use common::requests::MessagePage;
use common::session::Session;
use gloo_net::http::Request;

use super::http::{authorized, fetch_data, fetch_unit};
use crate::config::api;

/// Public contact form.
pub async fn send(payload: &ContactMessagePayload) -> Result<(), ApiError> {
    let request = Request::post(&api().contact_messages(None))
        .header("Accept", "application/json")
        .json(payload);
    fetch_unit(request, "Impossible d'envoyer votre message").await
}

pub async fn list(session: &Session) -> Result<Vec<ContactMessage>, ApiError> {
    let request = authorized(Request::get(&api().contact_messages(None)), session).build();
    let page: MessagePage = fetch_data(request, "Impossible de charger les messages").await?;
    Ok(page.messages)
}

/// Number of messages still unread, for the admin badge.
pub async fn unread_count(session: &Session) -> Result<usize, ApiError> {
    let url = api().contact_messages(Some(UNREAD_STATUS));
    let request = authorized(Request::get(&url), session).build();
    let page: MessagePage = fetch_data(request, "Impossible de charger les messages").await?;
    Ok(page.messages.iter().filter(|m| m.is_unread()).count())
}

pub async fn mark_read(id: &str, session: &Session) -> Result<(), ApiError> {
    let request = authorized(Request::patch(&api().mark_message_read(id)), session).build();
    fetch_unit(request, "Impossible de marquer le message comme lu").await
}

pub async fn delete(id: &str, session: &Session) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&api().contact_message(id)), session).build();
    fetch_unit(request, "Impossible de supprimer le message").await
}
