//! Payment Endpoints

use gymdesk_core::models::{Page, Payment, PaymentStatus};
use gymdesk_core::Params;
use serde::Serialize;

use super::{delete_json, get_json, post_json, put_json, ApiError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentPayload {
    pub member_name: String,
    pub membership_id: Option<u64>,
    pub amount: f64,
    pub method: String,
    pub status: PaymentStatus,
}

pub async fn list(params: Params) -> Result<Page<Payment>, ApiError> {
    get_json("/payments", &params).await
}

pub async fn get(id: u64) -> Result<Payment, ApiError> {
    get_json(&format!("/payments/{id}"), &Params::new()).await
}

pub async fn create(payload: PaymentPayload) -> Result<Payment, ApiError> {
    post_json("/payments", &payload).await
}

pub async fn update(id: u64, payload: PaymentPayload) -> Result<Payment, ApiError> {
    put_json(&format!("/payments/{id}"), &payload).await
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    delete_json(&format!("/payments/{id}")).await
}
