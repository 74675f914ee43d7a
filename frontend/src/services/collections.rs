//! `collection-requests`: the quotes submitted through the wizard.

use common::error::ApiError;
use common::model::collection::{CollectionRequest, CollectionStatus};
use common::requests::CollectionPage;
use common::session::Session;
use common::wizard::submission::{status_body, Submission};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::http::{authorized, fetch_data, fetch_unit, form_data};
use crate::config::api;

/// A request whose local attachments are browser files.
pub type Collection = CollectionRequest<File>;

pub async fn list(session: &Session) -> Result<Vec<Collection>, ApiError> {
    let request = authorized(Request::get(&api().collection_requests()), session).build();
    let page: CollectionPage =
        fetch_data(request, "Impossible de charger les demandes").await?;
    Ok(page
        .collection_requests
        .into_iter()
        .map(Collection::from)
        .collect())
}

/// URL and `FormData` of a wizard submission. Built synchronously so the
/// borrowed draft can be released before the request is awaited.
pub fn prepare(submission: &Submission<'_, File>) -> Result<(String, FormData), ApiError> {
    let url = match submission.target.record_id() {
        Some(id) => api().collection_request(id),
        None => api().collection_requests(),
    };
    Ok((url, form_data(&submission.body)?))
}

/// Posts a prepared submission. Updates carry the `_method=PUT` override.
pub async fn send(url: String, form: FormData, session: &Session) -> Result<(), ApiError> {
    let request = authorized(Request::post(&url), session).body(form);
    fetch_unit(request, "Une erreur est survenue lors de l'envoi de votre demande.").await
}

pub async fn update_status(
    id: &str,
    status: CollectionStatus,
    session: &Session,
) -> Result<(), ApiError> {
    let form = form_data(&status_body::<File>(status))?;
    let request = authorized(Request::post(&api().collection_request(id)), session).body(form);
    fetch_unit(request, "Impossible de mettre à jour le statut").await
}

pub async fn delete(id: &str, session: &Session) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&api().collection_request(id)), session).build();
    fetch_unit(request, "Impossible de supprimer la demande").await
}
