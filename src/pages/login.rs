//! Sign-in screen shown while no session exists

use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match session.login(&email.get_untracked(), &password.get_untracked()) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                log::warn!("[SESSION] Sign-in rejected: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Welcome back"</h1>
                <p class="login-hint">"Sign in to manage your projects and tasks"</p>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button type="submit" class="btn-primary">"Sign In"</button>
            </form>
        </div>
    }
}
