//! Top-level screens

mod dashboard;
mod login;
mod project_detail;
mod projects;
mod settings;
mod task_detail;
mod tasks;
mod teams;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use settings::SettingsPage;
pub use task_detail::TaskDetailPage;
pub use tasks::TasksPage;
pub use teams::TeamsPage;
