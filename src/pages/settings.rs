//! Account, organization and diagnostics

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorState, LoadingState};
use crate::config::AppConfig;
use crate::format::format_date;
use crate::graphql::use_graphql_client;
use crate::hooks::{fetch_organization, use_organization};
use crate::session::use_session;
use crate::toast::use_toaster;
use crate::view_state::EntityState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let client = use_graphql_client();
    let toaster = use_toaster();
    let config = expect_context::<AppConfig>();

    // Recreated whenever the session switches organization
    let organization_block = move || {
        let slug = session.state().with(|s| s.organization_slug().map(str::to_string)).unwrap_or_default();
        view! { <OrganizationDetails slug=slug /> }
    };

    let (switch_slug, set_switch_slug) = signal(String::new());
    let (switching, set_switching) = signal(false);
    let (log_lines, set_log_lines) = signal(rolling_logger::recent_lines());

    let on_switch = {
        let client = client.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let slug = switch_slug.get_untracked().trim().to_string();
            if slug.is_empty() {
                return;
            }
            let client = client.clone();
            set_switching.set(true);
            spawn_local(async move {
                match fetch_organization(&client, &slug).await {
                    Ok(Some(org)) => {
                        let name = org.name.clone();
                        match session.set_organization(org) {
                            Ok(()) => {
                                client.reset_cache();
                                client.refetch_all();
                                toaster.success(format!("Switched to {}", name));
                                let _ = set_switch_slug.try_set(String::new());
                            }
                            Err(e) => toaster.error(e.to_string()),
                        }
                    }
                    Ok(None) => toaster.error(format!("No organization with slug \"{}\"", slug)),
                    Err(e) => toaster.error(e.to_string()),
                }
                let _ = set_switching.try_set(false);
            });
        }
    };

    let sign_out = move |_| {
        session.logout();
        client.reset_cache();
    };

    let user = move || session.state().with(|s| s.user.clone()).unwrap_or_default();

    view! {
        <div class="page settings">
            <header class="page-header">
                <h1>"Settings"</h1>
            </header>
            <section class="card">
                <h2>"Account"</h2>
                <dl class="detail-grid">
                    <dt>"Name"</dt><dd>{move || user().display_name().to_string()}</dd>
                    <dt>"Email"</dt><dd>{move || user().email}</dd>
                </dl>
                <button class="btn-secondary" on:click=sign_out>"Sign out"</button>
            </section>
            <section class="card">
                <h2>"Organization"</h2>
                {organization_block}
                <form class="inline-form" on:submit=on_switch>
                    <input
                        type="text"
                        placeholder="Organization slug"
                        prop:value=move || switch_slug.get()
                        on:input=move |ev| set_switch_slug.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary" disabled=move || switching.get()>
                        {move || if switching.get() { "Switching..." } else { "Switch" }}
                    </button>
                </form>
            </section>
            <section class="card diagnostics">
                <h2>"Diagnostics"</h2>
                <dl class="detail-grid">
                    <dt>"GraphQL endpoint"</dt><dd>{config.graphql_endpoint.clone()}</dd>
                    <dt>"API base URL"</dt><dd>{config.api_base_url.clone()}</dd>
                    <dt>"Log level"</dt><dd>{config.log_level.to_string()}</dd>
                </dl>
                <button class="btn-ghost" on:click=move |_| set_log_lines.set(rolling_logger::recent_lines())>
                    "Refresh log"
                </button>
                <pre class="log-view">{move || log_lines.get().join("\n")}</pre>
            </section>
        </div>
    }
}

#[component]
fn OrganizationDetails(slug: String) -> impl IntoView {
    let session = use_session();
    let organization = use_organization(&slug);

    move || {
        match EntityState::select(
            organization.data.get().as_ref(),
            organization.loading.get(),
            organization.error.get().as_deref(),
        ) {
            EntityState::Loading => view! { <LoadingState message="Loading organization..." /> }.into_any(),
            EntityState::Error(message) => view! {
                <ErrorState message=message on_retry=Callback::new(move |_| organization.refetch()) />
            }
            .into_any(),
            // Fall back to what the session remembers
            EntityState::NotFound => {
                let org = session.organization().unwrap_or_default();
                view! {
                    <dl class="detail-grid">
                        <dt>"Name"</dt><dd>{org.name}</dd>
                        <dt>"Slug"</dt><dd>{org.slug}</dd>
                        <dt>"Contact"</dt><dd>{org.contact_email}</dd>
                    </dl>
                }
                .into_any()
            }
            EntityState::Ready(org) => view! {
                <dl class="detail-grid">
                    <dt>"Name"</dt><dd>{org.name}</dd>
                    <dt>"Slug"</dt><dd>{org.slug}</dd>
                    <dt>"Contact"</dt><dd>{org.contact_email}</dd>
                    <dt>"Created"</dt><dd>{org.created_at.as_deref().map(format_date).unwrap_or_default()}</dd>
                </dl>
            }
            .into_any(),
        }
    }
}
