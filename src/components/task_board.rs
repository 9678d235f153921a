//! Task Board Component
//!
//! Four status columns. Dragging a card onto another column changes the
//! task's status; order inside a column is not tracked.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::board::{partition, status_change_for_drop};
use crate::components::TaskCard;
use crate::models::{Task, TaskStatus, User};

type BoardDnd = DndSignals<String, TaskStatus>;

#[component]
pub fn TaskBoard(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] users: Signal<Vec<User>>,
    /// Fired once per drop on a different column: `(task_id, new_status)`
    #[prop(into)]
    on_status_change: Callback<(String, TaskStatus)>,
    #[prop(into)] on_open: Callback<String>,
    #[prop(optional, into)] on_add: Option<Callback<TaskStatus>>,
) -> impl IntoView {
    let dnd: BoardDnd = create_dnd_signals();

    bind_global_handlers(dnd, move |task_id: String, target: TaskStatus| {
        let change = tasks.with_untracked(|all| status_change_for_drop(all, &task_id, &target));
        match change {
            Some(change) => {
                log::debug!("[DND] Task {} dropped on {}", change.0, change.1.as_str());
                on_status_change.run(change);
            }
            None => log::debug!("[DND] Task {} dropped on its own column", task_id),
        }
    });

    // The click that ends a drag must not open the card
    let open = Callback::new(move |id: String| {
        if !dnd.drag_just_ended.get_untracked() {
            on_open.run(id);
        }
    });

    view! {
        <div class="task-board" class:dragging=move || dnd.any_dragging()>
            {move || {
                partition(&tasks.get())
                    .into_iter()
                    .map(|(status, column_tasks)| view! {
                        <BoardColumn
                            status=status
                            tasks=column_tasks
                            users=users
                            dnd=dnd
                            on_open=open
                            on_add=on_add
                        />
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn BoardColumn(
    status: TaskStatus,
    tasks: Vec<Task>,
    users: Signal<Vec<User>>,
    dnd: BoardDnd,
    on_open: Callback<String>,
    on_add: Option<Callback<TaskStatus>>,
) -> impl IntoView {
    let on_mouseenter = make_on_target_mouseenter(dnd, status.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let column_class = {
        let status = status.clone();
        move || {
            let mut c = format!("board-column {}", status.css_class());
            if dnd.is_drop_target(&status) {
                c.push_str(" drop-target");
            }
            c
        }
    };

    let count = tasks.len();
    let add_button = on_add.map(|add| {
        let status = status.clone();
        view! {
            <button class="btn-ghost" on:click=move |_| add.run(status.clone())>"Add Task"</button>
        }
    });

    let cards = if tasks.is_empty() {
        view! { <div class="column-empty">"No tasks"</div> }.into_any()
    } else {
        tasks
            .into_iter()
            .map(|task| {
                let id = task.id.clone();
                let on_mousedown = make_on_mousedown(dnd, id.clone());
                let card_class = move || {
                    if dnd.is_dragging(&id) { "board-card dragging" } else { "board-card" }
                };
                view! {
                    <div class=card_class on:mousedown=on_mousedown>
                        <TaskCard task=task users=users on_open=on_open />
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <div class="column-header">
                <span class="column-title">{status.label()}</span>
                <span class="column-count">{count}</span>
                {add_button}
            </div>
            <div class="column-body">{cards}</div>
        </div>
    }
}
