//! Membership Endpoints

use gymdesk_core::models::{ExerciseStatus, Membership, Page};
use gymdesk_core::Params;
use serde::Serialize;

use super::{delete_json, get_json, post_empty, post_json, put_json, ApiError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MembershipPayload {
    pub name: String,
    pub price: f64,
    pub duration_days: u32,
    pub status: ExerciseStatus,
}

pub async fn list(params: Params) -> Result<Page<Membership>, ApiError> {
    get_json("/memberships", &params).await
}

pub async fn get(id: u64) -> Result<Membership, ApiError> {
    get_json(&format!("/memberships/{id}"), &Params::new()).await
}

pub async fn create(payload: MembershipPayload) -> Result<Membership, ApiError> {
    post_json("/memberships", &payload).await
}

pub async fn update(id: u64, payload: MembershipPayload) -> Result<Membership, ApiError> {
    put_json(&format!("/memberships/{id}"), &payload).await
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    delete_json(&format!("/memberships/{id}")).await
}

pub async fn toggle_status(id: u64) -> Result<Membership, ApiError> {
    post_empty(&format!("/memberships/{id}/toggle-status")).await
}
