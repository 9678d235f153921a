//! Taskboard Frontend App
//!
//! Provides the shared services and switches between sign-in and the
//! sidebar layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Sidebar;
use crate::config::AppConfig;
use crate::context::{AppContext, Route};
use crate::graphql::GraphQlClient;
use crate::pages::{
    DashboardPage, LoginPage, ProjectDetailPage, ProjectsPage, SettingsPage, TaskDetailPage, TasksPage, TeamsPage,
};
use crate::session::Session;
use crate::store::UiState;
use crate::toast::{ToastHost, Toaster};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = Session::restore();
    let client = GraphQlClient::new(&config.graphql_endpoint);
    let toaster = Toaster::new(config.toast_duration_ms);
    let route = signal(Route::Dashboard);

    log::info!("[APP] Using GraphQL endpoint {}", client.endpoint());

    // Provide context to all children
    provide_context(config);
    provide_context(session);
    provide_context(client);
    provide_context(toaster);
    provide_context(Store::new(UiState::default()));
    provide_context(AppContext::new(route));

    let (current_route, set_route) = route;

    // Land on the dashboard after every sign-in
    Effect::new(move |was_authenticated: Option<bool>| {
        let authenticated = session.state().with(|s| s.is_authenticated());
        if authenticated && was_authenticated == Some(false) {
            set_route.set(Route::Dashboard);
        }
        authenticated
    });

    let page = move || match current_route.get() {
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::Projects => view! { <ProjectsPage /> }.into_any(),
        Route::ProjectDetail(id) => view! { <ProjectDetailPage id=id /> }.into_any(),
        Route::Tasks => view! { <TasksPage /> }.into_any(),
        Route::TaskDetail(id) => view! { <TaskDetailPage id=id /> }.into_any(),
        Route::Teams => view! { <TeamsPage /> }.into_any(),
        Route::Settings => view! { <SettingsPage /> }.into_any(),
    };

    view! {
        <Show
            when=move || session.state().with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <div class="app-layout">
                <Sidebar />
                <main class="main-content">{page}</main>
            </div>
        </Show>
        <ToastHost />
    }
}
