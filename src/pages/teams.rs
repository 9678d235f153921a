//! Team members

use leptos::prelude::*;

use crate::components::{EmptyState, ErrorState, LoadingState};
use crate::filters::filter_users;
use crate::format::initials;
use crate::hooks::use_users;
use crate::view_state::ListState;

#[component]
pub fn TeamsPage() -> impl IntoView {
    let users = use_users();
    let (search, set_search) = signal(String::new());

    let member_count = move || users.data.with(|d| d.as_ref().map(Vec::len).unwrap_or(0));

    let body = move || {
        match ListState::select(users.data.get().as_ref(), users.loading.get(), users.error.get().as_deref()) {
            ListState::Loading => view! { <LoadingState message="Loading team..." /> }.into_any(),
            ListState::Error(message) => view! {
                <ErrorState message=message on_retry=Callback::new(move |_| users.refetch()) />
            }
            .into_any(),
            ListState::Empty => view! { <EmptyState title="No team members yet" /> }.into_any(),
            ListState::Ready(list) => {
                let visible = filter_users(&list, &search.get());
                if visible.is_empty() {
                    return view! { <EmptyState title="No members match your search" /> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {visible
                            .into_iter()
                            .map(|u| view! {
                                <div class="card member-card">
                                    <span class="avatar large">{initials(u.display_name())}</span>
                                    <div class="member-info">
                                        <span class="member-name">{u.display_name().to_string()}</span>
                                        <span class="member-email">{u.email.clone()}</span>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="page teams">
            <header class="page-header">
                <div>
                    <h1>"Teams"</h1>
                    <p class="page-subtitle">{move || format!("{} members", member_count())}</p>
                </div>
            </header>
            <div class="toolbar">
                <input
                    type="search"
                    placeholder="Search by name or email..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>
            {body}
        </div>
    }
}
