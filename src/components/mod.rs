//! UI Components

mod dashboard_panel;
mod employee_panel;
mod exercise_panel;
mod login_form;
mod pagination_bar;
mod profile_panel;
mod search_bar;
mod settings_panel;
mod status_badge;
mod upload_zone;

pub use dashboard_panel::DashboardPanel;
pub use employee_panel::EmployeePanel;
pub use exercise_panel::ExercisePanel;
pub use login_form::LoginForm;
pub use pagination_bar::PaginationBar;
pub use profile_panel::ProfilePanel;
pub use search_bar::SearchBar;
pub use settings_panel::SettingsPanel;
pub use status_badge::StatusBadge;
pub use upload_zone::UploadZone;
