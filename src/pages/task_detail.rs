//! Single task: details, status menu, deletion and comments

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CommentList, DeleteConfirmButton, EmptyState, ErrorState, LoadingState};
use crate::board::settled_status;
use crate::context::{use_app_context, Route};
use crate::format::{format_date, is_overdue};
use crate::hooks::{use_delete_task, use_task, use_update_task, use_users, IdInput, UpdateTaskInput};
use crate::models::{Task, TaskStatus};
use crate::view_state::EntityState;

#[component]
pub fn TaskDetailPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let task = use_task(&id);
    let users = use_users();
    let update = use_update_task();
    let delete = use_delete_task();
    let task_id = StoredValue::new(id);

    let remove = Callback::new(move |_| {
        let id = task_id.get_value();
        spawn_local(async move {
            if matches!(delete.run(IdInput::new(id)).await, Ok(payload) if payload.is_success()) {
                ctx.navigate(Route::Tasks);
            }
        });
    });

    let details = move |t: Task| {
        let completed = t.status == TaskStatus::Completed;
        let overdue = is_overdue(t.due_date.as_deref(), completed, chrono::Local::now().date_naive());
        let assignee = users
            .data
            .get()
            .and_then(|list| t.assignee(&list).map(|u| u.display_name().to_string()))
            .or_else(|| t.assignee_email.clone())
            .unwrap_or_else(|| "Unassigned".to_string());
        let project_id = t.project_id().map(str::to_string);
        let shown_status = RwSignal::new(t.status.clone());
        let previous = t.status.clone();
        let change_status = move |status: TaskStatus| {
            let id = task_id.get_value();
            let previous = previous.clone();
            shown_status.set(status.clone());
            spawn_local(async move {
                let applied = matches!(
                    update.run(UpdateTaskInput::status_change(id, status.clone())).await,
                    Ok(payload) if payload.is_success()
                );
                let _ = shown_status.try_set(settled_status(&previous, status, applied));
            });
        };

        view! {
            <header class="page-header">
                <div>
                    <button class="btn-ghost back" on:click=move |_| ctx.navigate(Route::Tasks)>"Back to Tasks"</button>
                    <h1>{t.title.clone()}</h1>
                    <div class="badges">
                        <span class=format!("badge {}", t.status.css_class())>{t.status.label()}</span>
                        <span class=format!("badge {}", t.priority.css_class())>{t.priority.label()}</span>
                    </div>
                </div>
                <div class="header-actions">
                    <select
                        prop:value=move || shown_status.with(|s| s.as_str().to_string())
                        on:change=move |ev| change_status(TaskStatus::parse(&event_target_value(&ev)))
                        disabled=move || update.loading().get()
                    >
                        {TaskStatus::ALL
                            .iter()
                            .map(|s| {
                                let value = s.as_str().to_string();
                                let selected = shown_status.with_untracked(|shown| shown == s);
                                view! { <option value=value selected=selected>{s.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                    <DeleteConfirmButton button_class="btn-ghost danger" label="Delete Task" busy=delete.loading() on_confirm=remove />
                </div>
            </header>
            <section class="card task-details">
                <p class="card-description">
                    {t.description.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "No description".to_string())}
                </p>
                <dl class="detail-grid">
                    <dt>"Project"</dt>
                    <dd>
                        {match project_id {
                            Some(pid) => {
                                let name = t.project_name().unwrap_or("View project").to_string();
                                view! {
                                    <button class="link" on:click=move |_| ctx.navigate(Route::ProjectDetail(pid.clone()))>
                                        {name}
                                    </button>
                                }
                                .into_any()
                            }
                            None => view! { <span>"None"</span> }.into_any(),
                        }}
                    </dd>
                    <dt>"Assignee"</dt>
                    <dd>{assignee}</dd>
                    <dt>"Due"</dt>
                    <dd class:overdue=overdue>
                        {t.due_date.as_deref().map(format_date).unwrap_or_else(|| "No due date".to_string())}
                    </dd>
                    <dt>"Created"</dt>
                    <dd>{t.created_at.as_deref().map(format_date).unwrap_or_default()}</dd>
                    <dt>"Updated"</dt>
                    <dd>{t.updated_at.as_deref().map(format_date).unwrap_or_default()}</dd>
                </dl>
            </section>
        }
    };

    let page = move || {
        match EntityState::select(task.data.get().as_ref(), task.loading.get(), task.error.get().as_deref()) {
            EntityState::Loading => view! { <LoadingState message="Loading task..." /> }.into_any(),
            EntityState::Error(message) => view! {
                <ErrorState message=message on_retry=Callback::new(move |_| task.refetch()) />
            }
            .into_any(),
            EntityState::NotFound => view! {
                <EmptyState title="Task not found" description="It may have been deleted">
                    <button class="btn-secondary" on:click=move |_| ctx.navigate(Route::Tasks)>"Back to Tasks"</button>
                </EmptyState>
            }
            .into_any(),
            EntityState::Ready(t) => details(t).into_any(),
        }
    };

    view! {
        <div class="page task-detail">
            {page}
            <CommentList task_id=task_id.get_value() />
        </div>
    }
}
