//! Projects list with search, status filter and view toggle

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EmptyState, ErrorState, LoadingState, ProjectCard, ProjectFormModal};
use crate::context::{use_app_context, Route};
use crate::filters::{count_projects, filter_projects, Selection};
use crate::hooks::{use_delete_project, use_projects, IdInput};
use crate::models::{Project, ProjectStatus};
use crate::store::{use_ui_store, UiStateStoreFields, ViewMode};
use crate::view_state::ListState;

/// Which modal is open
#[derive(Clone, PartialEq)]
enum ProjectModal {
    Create,
    Edit(Project),
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let projects = use_projects();
    let delete = use_delete_project();

    let status_filter = RwSignal::new(Selection::<ProjectStatus>::All);
    let modal = RwSignal::new(None::<ProjectModal>);

    let open = Callback::new(move |id: String| ctx.navigate(Route::ProjectDetail(id)));
    let edit = Callback::new(move |p: Project| modal.set(Some(ProjectModal::Edit(p))));
    let remove = Callback::new(move |id: String| {
        spawn_local(async move {
            let _ = delete.run(IdInput::new(id)).await;
        });
    });

    let all = move || projects.data.get().unwrap_or_default();

    let status_options = move || {
        let list = all();
        let mut options = vec![(Selection::All, "All".to_string(), count_projects(&list, &Selection::All))];
        options.extend(ProjectStatus::ALL.iter().map(|s| {
            let selection = Selection::Only(s.clone());
            let count = count_projects(&list, &selection);
            (selection, s.label().to_string(), count)
        }));
        options
    };

    let body = move || {
        let state = ListState::select(
            projects.data.get().as_ref(),
            projects.loading.get(),
            projects.error.get().as_deref(),
        );
        let mode = store.projects_view().get();
        match state {
            ListState::Loading => view! { <LoadingState message="Loading projects..." /> }.into_any(),
            ListState::Error(message) => view! {
                <ErrorState message=message on_retry=Callback::new(move |_| projects.refetch()) />
            }
            .into_any(),
            ListState::Empty => view! {
                <EmptyState title="No projects yet" description="Create your first project to get started">
                    <button class="btn-primary" on:click=move |_| modal.set(Some(ProjectModal::Create))>
                        "New Project"
                    </button>
                </EmptyState>
            }
            .into_any(),
            ListState::Ready(list) => {
                let visible = filter_projects(&list, &store.projects_search().get(), &status_filter.get());
                if visible.is_empty() {
                    return view! {
                        <EmptyState title="No matching projects" description="Try a different search or filter" />
                    }
                    .into_any();
                }
                let list_row = mode == ViewMode::List;
                view! {
                    <div class=mode.container_class()>
                        {visible
                            .into_iter()
                            .map(|p| view! {
                                <ProjectCard project=p list_row=list_row on_open=open on_edit=edit on_delete=remove />
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="page projects">
            <header class="page-header">
                <div>
                    <h1>"Projects"</h1>
                    <p class="page-subtitle">"Track and manage your organization's projects"</p>
                </div>
                <button class="btn-primary" on:click=move |_| modal.set(Some(ProjectModal::Create))>
                    "New Project"
                </button>
            </header>
            <div class="toolbar">
                <input
                    type="search"
                    placeholder="Search projects..."
                    prop:value=move || store.projects_search().get()
                    on:input=move |ev| store.projects_search().set(event_target_value(&ev))
                />
                <div class="filter-chips">
                    {move || status_options()
                        .into_iter()
                        .map(|(selection, label, count)| {
                            let active = status_filter.get() == selection;
                            view! {
                                <button
                                    class="chip"
                                    class:active=active
                                    on:click=move |_| status_filter.set(selection.clone())
                                >
                                    {format!("{} ({})", label, count)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="btn-secondary"
                    on:click=move |_| store.projects_view().update(|m| *m = m.toggled())
                >
                    {move || match store.projects_view().get() {
                        ViewMode::Grid => "List view",
                        ViewMode::List => "Grid view",
                    }}
                </button>
            </div>
            {body}
            {move || modal.get().map(|m| {
                let close = Callback::new(move |_| modal.set(None));
                match m {
                    ProjectModal::Create => view! { <ProjectFormModal on_close=close /> }.into_any(),
                    ProjectModal::Edit(project) => view! { <ProjectFormModal project=project on_close=close /> }.into_any(),
                }
            })}
        </div>
    }
}
