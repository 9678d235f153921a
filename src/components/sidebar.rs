//! Sidebar Navigation

use leptos::prelude::*;

use crate::context::{use_app_context, Route};
use crate::format::initials;
use crate::graphql::use_graphql_client;
use crate::session::use_session;

const NAV_ITEMS: [(Route, &str); 5] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Projects, "Projects"),
    (Route::Tasks, "Tasks"),
    (Route::Teams, "Teams"),
    (Route::Settings, "Settings"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let client = use_graphql_client();

    let organization_name = move || {
        session
            .state()
            .with(|s| s.organization.as_ref().map(|o| o.name.clone()))
            .unwrap_or_else(|| "No organization".to_string())
    };
    let user = move || session.state().with(|s| s.user.clone());

    let sign_out = move |_| {
        session.logout();
        client.reset_cache();
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-name">"Taskboard"</span>
                <span class="brand-org">{organization_name}</span>
            </div>
            <nav class="sidebar-nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(route, label)| {
                        let target = route.clone();
                        let is_active = move || ctx.route.with(|r| r.section() == route);
                        view! {
                            <button
                                class="nav-item"
                                class:active=is_active
                                on:click=move |_| ctx.navigate(target.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar-user">
                {move || user().map(|u| view! {
                    <span class="avatar">{initials(u.display_name())}</span>
                    <div class="user-info">
                        <span class="user-name">{u.display_name().to_string()}</span>
                        <span class="user-email">{u.email.clone()}</span>
                    </div>
                })}
                <button class="btn-ghost" on:click=sign_out>"Sign out"</button>
            </div>
        </aside>
    }
}
