//! Catalog Endpoints
//!
//! Small reference collections (categories, muscle groups, equipment),
//! returned flat rather than in the paginated envelope.

use gymdesk_core::models::{Equipment, ExerciseCategory, MuscleGroup};
use gymdesk_core::Params;

use super::{get_json, ApiError};

pub async fn categories() -> Result<Vec<ExerciseCategory>, ApiError> {
    get_json("/exercise-categories", &Params::new()).await
}

pub async fn muscle_groups() -> Result<Vec<MuscleGroup>, ApiError> {
    get_json("/muscle-groups", &Params::new()).await
}

pub async fn equipment() -> Result<Vec<Equipment>, ApiError> {
    get_json("/equipment", &Params::new()).await
}
