//! Class Endpoints

use chrono::{DateTime, Utc};
use gymdesk_core::models::{ClassStatus, GymClass, Page};
use gymdesk_core::Params;
use serde::Serialize;

use super::{delete_json, get_json, post_empty, post_json, put_json, ApiError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassPayload {
    pub name: String,
    pub instructor: String,
    pub capacity: u32,
    pub starts_at: Option<DateTime<Utc>>,
    pub status: ClassStatus,
}

pub async fn list(params: Params) -> Result<Page<GymClass>, ApiError> {
    get_json("/classes", &params).await
}

pub async fn get(id: u64) -> Result<GymClass, ApiError> {
    get_json(&format!("/classes/{id}"), &Params::new()).await
}

pub async fn create(payload: ClassPayload) -> Result<GymClass, ApiError> {
    post_json("/classes", &payload).await
}

pub async fn update(id: u64, payload: ClassPayload) -> Result<GymClass, ApiError> {
    put_json(&format!("/classes/{id}"), &payload).await
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    delete_json(&format!("/classes/{id}")).await
}

pub async fn toggle_status(id: u64) -> Result<GymClass, ApiError> {
    post_empty(&format!("/classes/{id}/toggle-status")).await
}
