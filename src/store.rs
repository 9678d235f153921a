//! UI Preferences Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Survives
//! navigation between pages but not reloads.

use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn container_class(self) -> &'static str {
        match self {
            ViewMode::Grid => "card-grid",
            ViewMode::List => "card-list",
        }
    }
}

/// Per-page presentation choices
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub projects_view: ViewMode,
    pub tasks_view: ViewMode,
    /// Last search typed on each list page
    pub projects_search: String,
    pub tasks_search: String,
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled().container_class(), "card-grid");
    }
}
