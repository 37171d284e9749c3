//! Canned Fallback Payloads
//!
//! Served in place of the backend response when the backend is unreachable
//! and dev-fallback mode is on. Shapes mirror the real API so the UI cannot
//! tell the difference without inspecting the content.

use gymdesk_core::models::{Employee, EmployeeStatus, Payment, PaymentStatus};
use gymdesk_core::Pagination;
use serde::Serialize;
use serde_json::{json, Value};

fn page_value<T: Serialize>(items: Vec<T>) -> Value {
    let total = items.len() as u64;
    let pagination = Pagination::new(1, 10, total);
    json!({
        "items": items,
        "total": total,
        "page": 1,
        "limit": 10,
        "pages": pagination.total_pages,
        "has_next": false,
        "has_prev": false,
    })
}

fn sample_employee(id: u64, first: &str, last: &str, role: &str) -> Employee {
    Employee {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@gymdesk.local", first.to_lowercase()),
        role: role.to_string(),
        status: EmployeeStatus::Active,
        hired_at: None,
    }
}

pub fn employees_page() -> Value {
    page_value(vec![
        sample_employee(1, "Ana", "Torres", "trainer"),
        sample_employee(2, "Luis", "Mendoza", "receptionist"),
        sample_employee(3, "Carla", "Reyes", "manager"),
    ])
}

pub fn created_employee() -> Value {
    json!(sample_employee(99, "New", "Employee", "trainer"))
}

pub fn payments_page() -> Value {
    let payment = |id: u64, member: &str, amount: f64| Payment {
        id,
        member_name: member.to_string(),
        membership_id: Some(1),
        amount,
        method: "cash".to_string(),
        status: PaymentStatus::Paid,
        paid_at: None,
    };
    page_value(vec![
        payment(1, "Jorge Silva", 35.0),
        payment(2, "Maria Lopez", 50.0),
    ])
}

pub fn created_payment() -> Value {
    json!({
        "id": 99,
        "member_name": "Walk-in",
        "membership_id": null,
        "amount": 0.0,
        "method": "cash",
        "status": "pending",
        "paid_at": null,
    })
}

pub fn theme_presets() -> Value {
    json!([
        { "id": 1, "name": "Classic",  "primary": "#1f2937", "accent": "#f59e0b" },
        { "id": 2, "name": "Contrast", "primary": "#111111", "accent": "#22d3ee" },
        { "id": 3, "name": "Light",    "primary": "#f9fafb", "accent": "#2563eb" },
    ])
}

pub const THEME_CSS: &str = ":root {\n  --gd-primary: #1f2937;\n  --gd-accent: #f59e0b;\n  --gd-background: #ffffff;\n}\n";

pub fn logos_list() -> Value {
    json!({
        "items": [
            { "id": 1, "name": "default", "url": "/static/logo-default.png", "active": true }
        ],
        "total": 1,
    })
}

pub fn logo_item() -> Value {
    json!({ "id": 1, "name": "default", "url": "/static/logo-default.png", "active": true })
}

pub fn logo_deleted() -> Value {
    json!({ "deleted": true })
}

pub fn media_ack() -> Value {
    json!({ "id": 1, "url": "/static/uploads/placeholder.png" })
}

pub fn report_charts() -> Value {
    json!({
        "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        "datasets": [
            { "label": "Memberships", "data": [12, 19, 14, 22, 25, 31] },
            { "label": "Payments",    "data": [420.0, 660.5, 515.0, 780.0, 905.0, 1110.0] }
        ]
    })
}
