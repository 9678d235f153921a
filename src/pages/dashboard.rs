//! Dashboard: organization-wide stats and recent activity

use leptos::prelude::*;

use crate::components::{EmptyState, ErrorState, LoadingState, ProjectCard, ProjectFormModal, TaskCard};
use crate::context::{use_app_context, Route};
use crate::format::format_percentage;
use crate::hooks::{use_project_stats, use_projects, use_tasks, use_users};
use crate::models::ProjectStats;
use crate::view_state::ListState;

const RECENT_PROJECTS: usize = 3;
const RECENT_TASKS: usize = 4;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let stats = use_project_stats();
    let projects = use_projects();
    let tasks = use_tasks(None);
    let users = use_users();
    let users_list = Signal::derive(move || users.data.get().unwrap_or_default());
    let (creating, set_creating) = signal(false);

    let open_project = Callback::new(move |id: String| ctx.navigate(Route::ProjectDetail(id)));
    let open_task = Callback::new(move |id: String| ctx.navigate(Route::TaskDetail(id)));

    // Any failing query takes over the stats block
    let stats_error = move || {
        stats.error.get().or_else(|| projects.error.get()).or_else(|| tasks.error.get())
    };
    let retry_all = Callback::new(move |_| {
        stats.refetch();
        projects.refetch();
        tasks.refetch();
    });

    let stats_block = move || {
        if let Some(message) = stats_error() {
            return view! { <ErrorState message=message on_retry=retry_all /> }.into_any();
        }
        match stats.data.get() {
            Some(s) => view! { <StatsCards stats=s /> }.into_any(),
            None => view! { <LoadingState message="Loading statistics..." /> }.into_any(),
        }
    };

    let recent_projects = move || {
        match ListState::select(projects.data.get().as_ref(), projects.loading.get(), projects.error.get().as_deref()) {
            ListState::Loading => view! { <LoadingState /> }.into_any(),
            ListState::Error(_) => ().into_any(),
            ListState::Empty => view! {
                <EmptyState title="No projects yet" description="Create your first project to get started" />
            }
            .into_any(),
            ListState::Ready(list) => list
                .into_iter()
                .take(RECENT_PROJECTS)
                .map(|p| view! { <ProjectCard project=p on_open=open_project /> })
                .collect_view()
                .into_any(),
        }
    };

    let recent_tasks = move || {
        match ListState::select(tasks.data.get().as_ref(), tasks.loading.get(), tasks.error.get().as_deref()) {
            ListState::Loading => view! { <LoadingState /> }.into_any(),
            ListState::Error(_) => ().into_any(),
            ListState::Empty => view! { <EmptyState title="No tasks yet" /> }.into_any(),
            ListState::Ready(list) => list
                .into_iter()
                .take(RECENT_TASKS)
                .map(|t| view! { <TaskCard task=t users=users_list list_row=true show_project=true on_open=open_task /> })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="page dashboard">
            <header class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page-subtitle">"Overview of your organization's work"</p>
                </div>
                <button class="btn-primary" on:click=move |_| set_creating.set(true)>"New Project"</button>
            </header>
            <section class="stats">{stats_block}</section>
            <div class="dashboard-columns">
                <section>
                    <div class="section-header">
                        <h2>"Recent Projects"</h2>
                        <button class="btn-ghost" on:click=move |_| ctx.navigate(Route::Projects)>"View all"</button>
                    </div>
                    <div class="card-grid">{recent_projects}</div>
                </section>
                <section>
                    <div class="section-header">
                        <h2>"Recent Tasks"</h2>
                        <button class="btn-ghost" on:click=move |_| ctx.navigate(Route::Tasks)>"View all"</button>
                    </div>
                    <div class="card-list">{recent_tasks}</div>
                </section>
            </div>
            <Show when=move || creating.get()>
                <ProjectFormModal on_close=Callback::new(move |_| set_creating.set(false)) />
            </Show>
        </div>
    }
}

#[component]
fn StatsCards(stats: ProjectStats) -> impl IntoView {
    let cards = [
        ("Active Projects", format!("{}", stats.active_projects), format!("{} total", stats.total_projects)),
        ("Total Tasks", format!("{}", stats.total_tasks), format!("{} completed", stats.completed_tasks)),
        ("Completion Rate", format_percentage(stats.overall_completion_rate), "across all tasks".to_string()),
        ("Completed Projects", format!("{}", stats.completed_projects), "delivered".to_string()),
    ];

    view! {
        <div class="stats-grid">
            {cards
                .into_iter()
                .map(|(label, value, detail)| view! {
                    <div class="card stat-card">
                        <span class="stat-label">{label}</span>
                        <span class="stat-value">{value}</span>
                        <span class="stat-detail">{detail}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
