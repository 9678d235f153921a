//! Tasks across all projects, with filters and status tabs

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EmptyState, ErrorState, LoadingState, TaskCard};
use crate::context::{use_app_context, Route};
use crate::filters::{count_tasks, filter_tasks, Selection, TaskFilter};
use crate::hooks::{use_projects, use_tasks, use_update_task, use_users, UpdateTaskInput};
use crate::models::{TaskPriority, TaskStatus};
use crate::store::{use_ui_store, UiStateStoreFields, ViewMode};
use crate::view_state::ListState;

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let tasks = use_tasks(None);
    let projects = use_projects();
    let users = use_users();
    let update = use_update_task();

    let users_list = Signal::derive(move || users.data.get().unwrap_or_default());
    let status = RwSignal::new(Selection::<TaskStatus>::All);
    let priority = RwSignal::new(Selection::<TaskPriority>::All);
    let project = RwSignal::new(Selection::<String>::All);

    let filter = Memo::new(move |_| TaskFilter {
        search: store.tasks_search().get(),
        status: status.get(),
        priority: priority.get(),
        project_id: project.get(),
    });

    let open = Callback::new(move |id: String| ctx.navigate(Route::TaskDetail(id)));
    let complete = Callback::new(move |id: String| {
        spawn_local(async move {
            let _ = update.run(UpdateTaskInput::status_change(id, TaskStatus::Completed)).await;
        });
    });

    let tabs = move || {
        let list = tasks.data.get().unwrap_or_default();
        std::iter::once((Selection::All, "All"))
            .chain(TaskStatus::ALL.iter().map(|s| (Selection::Only(s.clone()), s.label())))
            .map(|(selection, label)| {
                let count = count_tasks(&list, &selection);
                let active = status.get() == selection;
                view! {
                    <button class="tab" class:active=active on:click=move |_| status.set(selection.clone())>
                        {format!("{} ({})", label, count)}
                    </button>
                }
            })
            .collect_view()
    };

    let project_options = move || {
        projects
            .data
            .get()
            .unwrap_or_default()
            .into_iter()
            .map(|p| view! { <option value=p.id.clone()>{p.name.clone()}</option> })
            .collect_view()
    };

    let body = move || {
        let state = ListState::select(tasks.data.get().as_ref(), tasks.loading.get(), tasks.error.get().as_deref());
        let mode = store.tasks_view().get();
        match state {
            ListState::Loading => view! { <LoadingState message="Loading tasks..." /> }.into_any(),
            ListState::Error(message) => view! {
                <ErrorState message=message on_retry=Callback::new(move |_| tasks.refetch()) />
            }
            .into_any(),
            ListState::Empty => view! {
                <EmptyState title="No tasks yet" description="Tasks are created from a project's board" />
            }
            .into_any(),
            ListState::Ready(list) => {
                let visible = filter_tasks(&list, &filter.get());
                if visible.is_empty() {
                    return view! { <EmptyState title="No matching tasks" /> }.into_any();
                }
                let list_row = mode == ViewMode::List;
                view! {
                    <div class=mode.container_class()>
                        {visible
                            .into_iter()
                            .map(|t| view! {
                                <TaskCard
                                    task=t
                                    users=users_list
                                    list_row=list_row
                                    show_project=true
                                    on_open=open
                                    on_complete=complete
                                />
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="page tasks">
            <header class="page-header">
                <div>
                    <h1>"Tasks"</h1>
                    <p class="page-subtitle">"Everything on your team's plate"</p>
                </div>
            </header>
            <div class="toolbar">
                <input
                    type="search"
                    placeholder="Search tasks..."
                    prop:value=move || store.tasks_search().get()
                    on:input=move |ev| store.tasks_search().set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    priority.set(if value == "all" { Selection::All } else { Selection::Only(TaskPriority::parse(&value)) });
                }>
                    <option value="all">"All priorities"</option>
                    {TaskPriority::ALL
                        .iter()
                        .map(|p| view! { <option value=p.as_str().to_string()>{p.label()}</option> })
                        .collect_view()}
                </select>
                <select on:change=move |ev| project.set(Selection::from_key(&event_target_value(&ev)))>
                    <option value="all">"All projects"</option>
                    {project_options}
                </select>
                <button class="btn-secondary" on:click=move |_| store.tasks_view().update(|m| *m = m.toggled())>
                    {move || match store.tasks_view().get() {
                        ViewMode::Grid => "List view",
                        ViewMode::List => "Grid view",
                    }}
                </button>
            </div>
            <div class="tabs">{tabs}</div>
            {body}
        </div>
    }
}
