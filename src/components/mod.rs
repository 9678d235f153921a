//! UI Components
//!
//! Reusable Leptos components.

mod comment_list;
mod delete_confirm_button;
mod project_card;
mod project_form_modal;
mod sidebar;
mod state_views;
mod task_board;
mod task_card;
mod task_form_modal;

pub use comment_list::CommentList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use project_card::ProjectCard;
pub use project_form_modal::ProjectFormModal;
pub use sidebar::Sidebar;
pub use state_views::{EmptyState, ErrorState, LoadingState};
pub use task_board::TaskBoard;
pub use task_card::TaskCard;
pub use task_form_modal::TaskFormModal;
