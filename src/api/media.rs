//! Media & Logo Endpoints
//!
//! Multipart uploads through the proxy surface.

use gloo_net::http::Request;
use gymdesk_core::Params;
use serde::{Deserialize, Serialize};
use web_sys::FormData;

use super::{authorized, decode, delete_json, get_json, put_json, ApiError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaAck {
    pub id: u64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogoList {
    pub items: Vec<Logo>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogoPayload {
    pub name: String,
    pub active: bool,
}

fn form_with_file(file: &web_sys::File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::fallback())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::fallback())?;
    Ok(form)
}

async fn post_form<T: serde::de::DeserializeOwned>(
    path: &str,
    file: &web_sys::File,
) -> Result<T, ApiError> {
    let form = form_with_file(file)?;
    let response = authorized(Request::post(&format!("/api{path}")))
        .body(form)?
        .send()
        .await?;
    decode(response).await
}

pub async fn upload(file: web_sys::File) -> Result<MediaAck, ApiError> {
    post_form("/media", &file).await
}

pub async fn list_logos() -> Result<LogoList, ApiError> {
    get_json("/logos", &Params::new()).await
}

pub async fn upload_logo(file: web_sys::File) -> Result<Logo, ApiError> {
    post_form("/logos", &file).await
}

pub async fn update_logo(id: u64, payload: LogoPayload) -> Result<Logo, ApiError> {
    put_json(&format!("/logos/{id}"), &payload).await
}

pub async fn delete_logo(id: u64) -> Result<(), ApiError> {
    delete_json(&format!("/logos/{id}")).await
}
