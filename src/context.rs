//! Application Context
//!
//! Navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// Screens reachable from the sidebar and from cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Projects,
    ProjectDetail(String),
    Tasks,
    TaskDetail(String),
    Teams,
    Settings,
}

impl Route {
    /// Sidebar entry highlighted for this route
    pub fn section(&self) -> Route {
        match self {
            Route::ProjectDetail(_) => Route::Projects,
            Route::TaskDetail(_) => Route::Tasks,
            other => other.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Projects | Route::ProjectDetail(_) => "Projects",
            Route::Tasks | Route::TaskDetail(_) => "Tasks",
            Route::Teams => "Teams",
            Route::Settings => "Settings",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub route: ReadSignal<Route>,
    /// Current screen - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self { route: route.0, set_route: route.1 }
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("[NAV] {:?}", route);
        self.set_route.set(route);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_routes_highlight_their_section() {
        assert_eq!(Route::ProjectDetail("3".to_string()).section(), Route::Projects);
        assert_eq!(Route::TaskDetail("9".to_string()).section(), Route::Tasks);
        assert_eq!(Route::Teams.section(), Route::Teams);
        assert_eq!(Route::TaskDetail("9".to_string()).title(), "Tasks");
    }
}
