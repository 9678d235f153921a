//! Single project: header, progress and the task board

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    DeleteConfirmButton, ErrorState, LoadingState, EmptyState, ProjectFormModal, TaskBoard, TaskFormModal,
};
use crate::context::{use_app_context, Route};
use crate::format::{format_date, format_percentage, progress_percent};
use crate::hooks::{use_delete_project, use_project, use_tasks, use_update_task, use_users, IdInput, UpdateTaskInput};
use crate::models::{Project, TaskStatus};
use crate::view_state::EntityState;

#[component]
pub fn ProjectDetailPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let project = use_project(&id);
    let tasks = use_tasks(Some(&id));
    let users = use_users();
    let update_task = use_update_task();
    let delete_project = use_delete_project();

    let task_list = Signal::derive(move || tasks.data.get().unwrap_or_default());
    let users_list = Signal::derive(move || users.data.get().unwrap_or_default());
    let editing = RwSignal::new(false);
    let adding_in = RwSignal::new(None::<TaskStatus>);
    let project_id = StoredValue::new(id);

    let on_status_change = Callback::new(move |(task_id, status): (String, TaskStatus)| {
        spawn_local(async move {
            let _ = update_task.run(UpdateTaskInput::status_change(task_id, status)).await;
        });
    });
    let open_task = Callback::new(move |id: String| ctx.navigate(Route::TaskDetail(id)));
    let add_task = Callback::new(move |status: TaskStatus| adding_in.set(Some(status)));
    let remove_project = Callback::new(move |_| {
        let id = project_id.get_value();
        spawn_local(async move {
            if matches!(delete_project.run(IdInput::new(id)).await, Ok(payload) if payload.is_success()) {
                ctx.navigate(Route::Projects);
            }
        });
    });

    // Counted from the loaded tasks so board moves show up immediately
    let counts = move |p: &Project| match tasks.data.get() {
        Some(list) => {
            let done = list.iter().filter(|t| t.status == TaskStatus::Completed).count() as u32;
            (done, list.len() as u32)
        }
        None => (p.completed_tasks_count(), p.tasks_count()),
    };

    let header = move |p: Project| {
        let progress_project = p.clone();
        let progress = move || {
            let (done, total) = counts(&progress_project);
            (done, total, progress_percent(done, total))
        };
        view! {
            <header class="page-header project-header">
                <div>
                    <button class="btn-ghost back" on:click=move |_| ctx.navigate(Route::Projects)>"Back to Projects"</button>
                    <h1>{p.name.clone()}</h1>
                    <span class=format!("badge {}", p.status.css_class())>{p.status.label()}</span>
                    <p class="page-subtitle">{p.description.clone().unwrap_or_default()}</p>
                </div>
                <div class="header-actions">
                    <button class="btn-secondary" on:click=move |_| editing.set(true)>"Edit Project"</button>
                    <button class="btn-primary" on:click=move |_| adding_in.set(Some(TaskStatus::Todo))>"New Task"</button>
                    <DeleteConfirmButton
                        button_class="btn-ghost danger"
                        label="Delete Project"
                        prompt="Delete this project and its tasks?"
                        busy=delete_project.loading()
                        on_confirm=remove_project
                    />
                </div>
            </header>
            <section class="card project-progress">
                <div class="progress-label">
                    <span>{
                        let progress = progress.clone();
                        move || {
                            let (done, total, _) = progress();
                            format!("{}/{} tasks completed", done, total)
                        }
                    }</span>
                    <span>{
                        let progress = progress.clone();
                        move || format_percentage(progress().2)
                    }</span>
                </div>
                <div class="progress-track">
                    <div class="progress-bar" style:width=move || format!("{}%", progress().2)></div>
                </div>
                {p.due_date.as_deref().map(|d| view! { <span class="card-meta">"Due " {format_date(d)}</span> })}
            </section>
        }
    };

    let board = move || {
        if let Some(message) = tasks.error.get() {
            return view! { <ErrorState message=message on_retry=Callback::new(move |_| tasks.refetch()) /> }.into_any();
        }
        if tasks.data.with(Option::is_none) && tasks.loading.get() {
            return view! { <LoadingState message="Loading tasks..." /> }.into_any();
        }
        view! {
            <TaskBoard
                tasks=task_list
                users=users_list
                on_status_change=on_status_change
                on_open=open_task
                on_add=add_task
            />
        }
        .into_any()
    };

    let page = move || {
        match EntityState::select(project.data.get().as_ref(), project.loading.get(), project.error.get().as_deref()) {
            EntityState::Loading => view! { <LoadingState message="Loading project..." /> }.into_any(),
            EntityState::Error(message) => view! {
                <ErrorState message=message on_retry=Callback::new(move |_| project.refetch()) />
            }
            .into_any(),
            EntityState::NotFound => view! {
                <EmptyState title="Project not found" description="It may have been deleted">
                    <button class="btn-secondary" on:click=move |_| ctx.navigate(Route::Projects)>"Back to Projects"</button>
                </EmptyState>
            }
            .into_any(),
            EntityState::Ready(p) => {
                let edit_modal = {
                    let p = p.clone();
                    move || editing.get().then(|| view! {
                        <ProjectFormModal project=p.clone() on_close=Callback::new(move |_| editing.set(false)) />
                    })
                };
                view! {
                    {header(p)}
                    {board}
                    {edit_modal}
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="page project-detail">
            {page}
            {move || adding_in.get().map(|status| view! {
                <TaskFormModal
                    project_id=project_id.get_value()
                    initial_status=status
                    on_close=Callback::new(move |_| adding_in.set(None))
                />
            })}
        </div>
    }
}
