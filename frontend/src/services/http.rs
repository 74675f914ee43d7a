//! Shared request plumbing: auth header, envelope decoding, error mapping and
//! conversion of a [`FormBody`] into a browser `FormData`.

use common::error::ApiError;
use common::multipart::{FormBody, PartValue};
use common::requests::Envelope;
use common::session::Session;
use gloo_net::http::{Request, RequestBuilder};
use log::{debug, error};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// Adds `Accept` and, when the session holds a token, `Authorization`.
pub fn authorized(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match session.bearer() {
        Some(bearer) => builder.header("Authorization", &bearer),
        None => builder,
    }
}

/// Sends `request` and returns the raw body of a 2xx response.
pub async fn fetch_text(
    request: Result<Request, gloo_net::Error>,
    fallback: &str,
) -> Result<String, ApiError> {
    let request = request.map_err(|err| ApiError::Network(err.to_string()))?;
    let url = request.url();
    let response = request.send().await.map_err(|err| {
        error!("{url}: {err}");
        ApiError::Network(err.to_string())
    })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if response.ok() {
        debug!("{url}: {status}");
        Ok(body)
    } else {
        let err = ApiError::from_response(status, &body, fallback);
        error!("{url}: {status} {err}");
        Err(err)
    }
}

/// Sends `request` and decodes the `data` member of the success envelope.
pub async fn fetch_data<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
    fallback: &str,
) -> Result<T, ApiError> {
    let body = fetch_text(request, fallback).await?;
    serde_json::from_str::<Envelope<T>>(&body)
        .map(|envelope| envelope.data)
        .map_err(|err| {
            error!("unexpected response shape: {err}");
            ApiError::Decode(err.to_string())
        })
}

/// Sends `request`, ignoring whatever a 2xx response carries.
pub async fn fetch_unit(
    request: Result<Request, gloo_net::Error>,
    fallback: &str,
) -> Result<(), ApiError> {
    fetch_text(request, fallback).await.map(|_| ())
}

/// Copies `body` into a `FormData`, files with their own name.
pub fn form_data(body: &FormBody<'_, File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for part in body.parts() {
        match &part.value {
            PartValue::Text(value) => form.append_with_str(&part.name, value),
            PartValue::File(file) => {
                form.append_with_blob_and_filename(&part.name, file, &file.name())
            }
        }
        .map_err(js_error)?;
    }
    Ok(form)
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(
        value
            .as_string()
            .unwrap_or_else(|| "FormData indisponible".to_string()),
    )
}
