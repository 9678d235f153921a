//! Project Card Component
//!
//! Grid card or list row for a project, with progress and actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::format::{format_date, format_percentage};
use crate::models::Project;

#[component]
pub fn ProjectCard(
    project: Project,
    /// Render as a compact list row
    #[prop(optional)]
    list_row: bool,
    #[prop(into)] on_open: Callback<String>,
    #[prop(optional, into)] on_edit: Option<Callback<Project>>,
    #[prop(optional, into)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let id = project.id.clone();
    let progress = project.progress();
    let counts = format!("{}/{} tasks", project.completed_tasks_count(), project.tasks_count());
    let updated = project
        .updated_at
        .as_deref()
        .or(project.created_at.as_deref())
        .map(format_date);
    let due = project.due_date.as_deref().map(format_date);
    let badge_class = format!("badge {}", project.status.css_class());

    let actions = {
        let edit_project = project.clone();
        let delete_id = id.clone();
        view! {
            <div class="card-actions">
                {on_edit.map(|edit| {
                    let p = edit_project.clone();
                    view! {
                        <button class="btn-ghost" on:click=move |ev| {
                            ev.stop_propagation();
                            edit.run(p.clone());
                        }>"Edit"</button>
                    }
                })}
                {on_delete.map(|delete| {
                    let id = delete_id.clone();
                    view! {
                        <DeleteConfirmButton
                            button_class="btn-ghost danger"
                            on_confirm=Callback::new(move |_| delete.run(id.clone()))
                        />
                    }
                })}
            </div>
        }
    };

    let open_id = id.clone();
    let on_click = move |_| on_open.run(open_id.clone());

    if list_row {
        return view! {
            <div class="project-row" on:click=on_click>
                <span class="project-name">{project.name.clone()}</span>
                <span class=badge_class>{project.status.label()}</span>
                <span class="project-counts">{counts}</span>
                <span class="project-progress">{format_percentage(progress)}</span>
                <span class="project-date">{due.unwrap_or_default()}</span>
                {actions}
            </div>
        }
        .into_any();
    }

    view! {
        <div class="card project-card" on:click=on_click>
            <div class="card-header">
                <h3 class="card-title">{project.name.clone()}</h3>
                <span class=badge_class>{project.status.label()}</span>
            </div>
            <p class="card-description">
                {project.description.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "No description".to_string())}
            </p>
            <div class="progress">
                <div class="progress-label">
                    <span>"Progress"</span>
                    <span>{format_percentage(progress)}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-bar" style:width=format!("{}%", progress)></div>
                </div>
            </div>
            <div class="card-meta">
                <span>{counts}</span>
                {due.map(|d| view! { <span>"Due " {d}</span> })}
                {updated.map(|d| view! { <span>"Updated " {d}</span> })}
            </div>
            {actions}
        </div>
    }
    .into_any()
}
