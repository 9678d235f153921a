//! Task Form Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::drafts::TaskDraft;
use crate::hooks::use_create_task;
use crate::models::TaskStatus;

#[component]
pub fn TaskFormModal(
    #[prop(into)] project_id: String,
    /// Column the task starts in
    #[prop(optional)]
    initial_status: TaskStatus,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let create = use_create_task();
    let draft = RwSignal::new(TaskDraft::with_status(initial_status));
    let error = RwSignal::new(None::<String>);
    let project_id = StoredValue::new(project_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }
        error.set(None);

        let input = current.to_create(&project_id.get_value());
        spawn_local(async move {
            if matches!(create.run(input).await, Ok(payload) if payload.is_success()) {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2>"Create New Task"</h2>
                <form on:submit=on_submit>
                    <label>
                        "Title"
                        <input
                            type="text"
                            placeholder="What needs to be done?"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
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
                                    draft.update(|d| d.status = TaskStatus::parse(&event_target_value(&ev)))
                                }
                            >
                                {TaskStatus::ALL
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
                    <label>
                        "Assignee Email"
                        <input
                            type="email"
                            placeholder="name@example.com"
                            prop:value=move || draft.with(|d| d.assignee_email.clone())
                            on:input=move |ev| draft.update(|d| d.assignee_email = event_target_value(&ev))
                        />
                    </label>
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || create.loading().get()>
                            {move || if create.loading().get() { "Creating..." } else { "Create Task" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
