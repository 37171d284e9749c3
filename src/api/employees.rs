//! Employee Endpoints
//!
//! These go through the proxy route surface, which substitutes fallback
//! data during development when the backend is down.

use gymdesk_core::models::{Employee, EmployeeStatus, Page};
use gymdesk_core::Params;
use serde::Serialize;

use super::{delete_json, get_json, post_empty, post_json, put_json, ApiError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub status: EmployeeStatus,
}

pub async fn list(params: Params) -> Result<Page<Employee>, ApiError> {
    get_json("/employees", &params).await
}

pub async fn get(id: u64) -> Result<Employee, ApiError> {
    get_json(&format!("/employees/{id}"), &Params::new()).await
}

pub async fn create(payload: EmployeePayload) -> Result<Employee, ApiError> {
    post_json("/employees", &payload).await
}

pub async fn update(id: u64, payload: EmployeePayload) -> Result<Employee, ApiError> {
    put_json(&format!("/employees/{id}"), &payload).await
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    delete_json(&format!("/employees/{id}")).await
}

pub async fn toggle_status(id: u64) -> Result<Employee, ApiError> {
    post_empty(&format!("/employees/{id}/toggle-status")).await
}
