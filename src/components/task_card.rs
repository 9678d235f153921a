//! Task Card Component

use leptos::prelude::*;

use crate::format::{format_date, is_overdue};
use crate::models::{Task, TaskStatus, User};

#[component]
pub fn TaskCard(
    task: Task,
    /// Used to show the assignee's name instead of their email
    #[prop(into)]
    users: Signal<Vec<User>>,
    #[prop(optional)] list_row: bool,
    #[prop(optional)] show_project: bool,
    #[prop(into)] on_open: Callback<String>,
    #[prop(optional, into)] on_complete: Option<Callback<String>>,
) -> impl IntoView {
    let id = task.id.clone();
    let completed = task.status == TaskStatus::Completed;
    let today = chrono::Local::now().date_naive();
    let overdue = is_overdue(task.due_date.as_deref(), completed, today);
    let due = task.due_date.as_deref().map(format_date);

    let assignee = {
        let task = task.clone();
        move || {
            let users = users.get();
            task.assignee(&users)
                .map(|u| u.display_name().to_string())
                .or_else(|| task.assignee_email.clone())
        }
    };

    let card_class = match (list_row, completed) {
        (true, _) => "task-row",
        (false, true) => "card task-card completed",
        (false, false) => "card task-card",
    };

    let open_id = id.clone();
    let complete_button = on_complete.filter(|_| !completed).map(|complete| {
        let id = id.clone();
        view! {
            <button
                class="btn-ghost"
                title="Mark complete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    complete.run(id.clone());
                }
            >
                "Complete"
            </button>
        }
    });

    view! {
        <div class=card_class on:click=move |_| on_open.run(open_id.clone())>
            <div class="card-header">
                <h4 class="card-title">{task.title.clone()}</h4>
                {complete_button}
            </div>
            {task.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                <p class="card-description">{d}</p>
            })}
            <div class="badges">
                <span class=format!("badge {}", task.status.css_class())>{task.status.label()}</span>
                <span class=format!("badge {}", task.priority.css_class())>{task.priority.label()}</span>
            </div>
            <div class="card-meta">
                {show_project.then(|| task.project_name().map(|name| view! {
                    <span class="task-project">{name.to_string()}</span>
                })).flatten()}
                {move || assignee().map(|a| view! { <span class="task-assignee">{a}</span> })}
                {due.map(|d| view! {
                    <span class=if overdue { "task-due overdue" } else { "task-due" }>
                        {if overdue { format!("Overdue: {}", d) } else { format!("Due {}", d) }}
                    </span>
                })}
            </div>
        </div>
    }
}
