//! Workout Endpoints

use gymdesk_core::models::{ExerciseStatus, Page, Workout};
use gymdesk_core::Params;
use serde::Serialize;

use super::{delete_json, get_json, post_json, put_json, ApiError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkoutExercisePayload {
    pub exercise_id: u64,
    pub position: u32,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkoutPayload {
    pub name: String,
    pub description: Option<String>,
    pub status: ExerciseStatus,
    pub exercises: Vec<WorkoutExercisePayload>,
}

pub async fn list(params: Params) -> Result<Page<Workout>, ApiError> {
    get_json("/workouts", &params).await
}

pub async fn get(id: u64) -> Result<Workout, ApiError> {
    get_json(&format!("/workouts/{id}"), &Params::new()).await
}

pub async fn create(payload: WorkoutPayload) -> Result<Workout, ApiError> {
    post_json("/workouts", &payload).await
}

pub async fn update(id: u64, payload: WorkoutPayload) -> Result<Workout, ApiError> {
    put_json(&format!("/workouts/{id}"), &payload).await
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    delete_json(&format!("/workouts/{id}")).await
}
