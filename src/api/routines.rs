//! Routine Endpoints

use gymdesk_core::models::{ExerciseStatus, Page, Routine};
use gymdesk_core::Params;
use serde::Serialize;

use super::{delete_json, get_json, post_json, put_json, ApiError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutineSessionPayload {
    pub workout_id: Option<u64>,
    pub weekday: u8,
    pub position: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutinePayload {
    pub name: String,
    pub description: Option<String>,
    pub status: ExerciseStatus,
    pub sessions: Vec<RoutineSessionPayload>,
}

pub async fn list(params: Params) -> Result<Page<Routine>, ApiError> {
    get_json("/routines", &params).await
}

pub async fn get(id: u64) -> Result<Routine, ApiError> {
    get_json(&format!("/routines/{id}"), &Params::new()).await
}

pub async fn create(payload: RoutinePayload) -> Result<Routine, ApiError> {
    post_json("/routines", &payload).await
}

pub async fn update(id: u64, payload: RoutinePayload) -> Result<Routine, ApiError> {
    put_json(&format!("/routines/{id}"), &payload).await
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    delete_json(&format!("/routines/{id}")).await
}
