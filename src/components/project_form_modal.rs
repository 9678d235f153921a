//! Project Form Modal
//!
//! Create or edit a project. The modal closes only once the server
//! reports success; otherwise the input stays for correction.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::drafts::ProjectDraft;
use crate::hooks::{use_create_project, use_update_project};
use crate::models::{Project, ProjectStatus};
use crate::session::use_session;

#[component]
pub fn ProjectFormModal(
    /// Project to edit; None creates a new one
    #[prop(optional)]
    project: Option<Project>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let create = use_create_project();
    let update = use_update_project();

    let editing_id = project.as_ref().map(|p| p.id.clone());
    let is_edit = editing_id.is_some();
    let draft = RwSignal::new(project.as_ref().map(ProjectDraft::from_project).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = Signal::derive(move || create.loading().get() || update.loading().get());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }
        error.set(None);

        let editing_id = editing_id.clone();
        let organization = session.organization();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => update.run(current.to_update(&id)).await,
                None => {
                    let Some(org) = organization else {
                        let _ = error.try_set(Some("No organization selected".to_string()));
                        return;
                    };
                    create.run(current.to_create(&org.slug)).await
                }
            };
            if matches!(&result, Ok(payload) if payload.is_success()) {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Project" } else { "Create New Project" }}</h2>
                <form on:submit=on_submit>
                    <label>
                        "Project Name"
                        <input
                            type="text"
                            placeholder="Enter project name"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            placeholder="Describe the project"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="form-row">
                        <label>
                            "Status"
                            <select
                                prop:value=move || draft.with(|d| d.status.as_str().to_string())
                                on:change=move |ev| {
                                    draft.update(|d| d.status = ProjectStatus::parse(&event_target_value(&ev)))
                                }
                            >
                                {ProjectStatus::ALL
                                    .iter()
                                    .map(|s| {
                                        let selected = draft.with_untracked(|d| &d.status == s);
                                        view! { <option value=s.as_str().to_string() selected=selected>{s.label()}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Due Date"
                            <input
                                type="date"
                                prop:value=move || draft.with(|d| d.due_date.clone())
                                on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || match (saving.get(), is_edit) {
                                (true, _) => "Saving...",
                                (false, true) => "Save Changes",
                                (false, false) => "Create Project",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
