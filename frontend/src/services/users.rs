use common::error::ApiError;
use common::model::user::{User, UserFormData};
use common::requests::UserPage;
use common::session::Session;
use gloo_net::http::Request;

use super::http::{authorized, fetch_data, fetch_unit};
use crate::config::api;

pub async fn list(session: &Session) -> Result<Vec<User>, ApiError> {
    let request = authorized(Request::get(&api().users()), session).build();
    let page: UserPage = fetch_data(request, "Impossible de charger les utilisateurs").await?;
    Ok(page.users)
}

pub async fn create(form: &UserFormData, session: &Session) -> Result<User, ApiError> {
    let request = authorized(Request::post(&api().users()), session).json(form);
    fetch_data(request, "Impossible de créer l'utilisateur").await
}

/// Updates identity and role. Passwords are not changed from here.
pub async fn update(id: &str, form: &UserFormData, session: &Session) -> Result<User, ApiError> {
    let request = authorized(Request::put(&api().user(id)), session).json(&form.without_password());
    fetch_data(request, "Impossible de modifier l'utilisateur").await
}

pub async fn delete(id: &str, session: &Session) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&api().user(id)), session).build();
    fetch_unit(request, "Impossible de supprimer l'utilisateur").await
}
