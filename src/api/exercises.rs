//! Exercise Endpoints

use gymdesk_core::models::{Exercise, ExerciseStatus, Page};
use gymdesk_core::Params;
use serde::Serialize;

use super::{delete_json, get_json, post_empty, post_json, put_json, ApiError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExercisePayload {
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<u64>,
    pub muscle_group_id: Option<u64>,
    pub equipment_id: Option<u64>,
    pub status: ExerciseStatus,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
}

pub async fn list(params: Params) -> Result<Page<Exercise>, ApiError> {
    get_json("/exercises", &params).await
}

pub async fn get(id: u64) -> Result<Exercise, ApiError> {
    get_json(&format!("/exercises/{id}"), &Params::new()).await
}

pub async fn create(payload: ExercisePayload) -> Result<Exercise, ApiError> {
    post_json("/exercises", &payload).await
}

pub async fn update(id: u64, payload: ExercisePayload) -> Result<Exercise, ApiError> {
    put_json(&format!("/exercises/{id}"), &payload).await
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    delete_json(&format!("/exercises/{id}")).await
}

pub async fn toggle_status(id: u64) -> Result<Exercise, ApiError> {
    post_empty(&format!("/exercises/{id}/toggle-status")).await
}
