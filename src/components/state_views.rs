//! Loading, error and empty placeholders

use leptos::prelude::*;

#[component]
pub fn LoadingState(#[prop(into, default = "Loading...".to_string())] message: String) -> impl IntoView {
    view! {
        <div class="state-view loading">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}

/// Error text with an optional retry button
#[component]
pub fn ErrorState(
    #[prop(into)] message: String,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="state-view error">
            <p class="state-title">"Something went wrong"</p>
            <p class="state-description">{message}</p>
            {on_retry.map(|retry| view! {
                <button class="btn-secondary" on:click=move |_| retry.run(())>"Try again"</button>
            })}
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="state-view empty">
            <p class="state-title">{title}</p>
            <p class="state-description">{description}</p>
            {children.map(|c| c())}
        </div>
    }
}
