//! Portfolio projects. Without an image the form is sent as JSON; with one,
//! as multipart (with the `_method=PUT` override on update).

use common::error::ApiError;
use common::model::project::{Project, ProjectForm};
use common::requests::ProjectPage;
use common::session::Session;
use gloo_net::http::Request;
use web_sys::File;

use super::http::{authorized, fetch_data, fetch_unit, form_data};
use crate::config::api;

pub async fn list(session: &Session) -> Result<Vec<Project>, ApiError> {
    let request = authorized(Request::get(&api().projects()), session).build();
    let page: ProjectPage = fetch_data(request, "Impossible de charger les projets").await?;
    Ok(page.projects)
}

/// Creates the project, or updates project `id`.
pub async fn save(
    id: Option<i64>,
    form: &ProjectForm,
    image: Option<&File>,
    session: &Session,
) -> Result<(), ApiError> {
    let url = match id {
        Some(id) => api().project(id),
        None => api().projects(),
    };
    let fallback = "Impossible d'enregistrer le projet";
    let request = match image {
        Some(file) => {
            let body = form_data(&form.multipart(file, id.is_some()))?;
            authorized(Request::post(&url), session).body(body)
        }
        None if id.is_some() => authorized(Request::put(&url), session).json(form),
        None => authorized(Request::post(&url), session).json(form),
    };
    fetch_unit(request, fallback).await
}

pub async fn delete(id: i64, session: &Session) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&api().project(id)), session).build();
    fetch_unit(request, "Impossible de supprimer le projet").await
}
