//! Comment List Component
//!
//! Thread of task comments with add, inline edit and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, ErrorState, LoadingState};
use crate::drafts::CommentEdit;
use crate::format::{initials, relative_time};
use crate::hooks::{use_comments, use_create_comment, use_delete_comment, use_update_comment, CreateCommentInput};
use crate::models::Comment;
use crate::session::use_session;
use crate::view_state::ListState;

#[component]
pub fn CommentList(task_id: String) -> impl IntoView {
    let session = use_session();
    let comments = use_comments(&task_id);
    let create = use_create_comment();
    let update = use_update_comment();
    let delete = use_delete_comment();

    let current_email = Memo::new(move |_| {
        session.state().with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())
    });

    let (content, set_content) = signal(String::new());
    let (author, set_author) = signal(current_email.get_untracked());
    let (form_error, set_form_error) = signal(None::<String>);
    let edit = RwSignal::new(CommentEdit::default());

    let task_id = StoredValue::new(task_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = content.get_untracked();
        let author_email = author.get_untracked();
        if body.trim().is_empty() {
            set_form_error.set(Some("Comment cannot be empty".to_string()));
            return;
        }
        if author_email.trim().is_empty() {
            set_form_error.set(Some("Author email is required".to_string()));
            return;
        }
        set_form_error.set(None);
        let input = CreateCommentInput {
            task_id: task_id.get_value(),
            content: body.trim().to_string(),
            author_email: author_email.trim().to_string(),
        };
        spawn_local(async move {
            if let Ok(payload) = create.run(input).await {
                if payload.is_success() {
                    let _ = set_content.try_set(String::new());
                }
            }
        });
    };

    let start_edit = move |comment: &Comment| edit.update(|e| e.start(comment));
    let cancel_edit = move || edit.update(CommentEdit::cancel);

    let save_edit = move || {
        let Some(input) = edit.with_untracked(CommentEdit::submission) else {
            return;
        };
        spawn_local(async move {
            let id = input.id.clone();
            let applied = matches!(update.run(input).await, Ok(payload) if payload.is_success());
            let _ = edit.try_update(|e| e.settle(&id, applied));
        });
    };

    let remove = move |id: String| {
        spawn_local(async move {
            let _ = delete.run(crate::hooks::IdInput::new(id)).await;
        });
    };

    let render_comment = move |comment: Comment| {
        let id = comment.id.clone();
        let is_own = current_email.with(|me| !me.is_empty() && me.eq_ignore_ascii_case(&comment.author_email));
        let when = relative_time(&comment.timestamp, chrono::Utc::now());
        let is_editing = {
            let id = id.clone();
            move || edit.with(|e| e.is_editing(&id))
        };
        let body = comment.content.clone();
        let edit_comment = comment.clone();
        let delete_id = id.clone();

        view! {
            <li class="comment">
                <span class="avatar">{initials(&comment.author_email)}</span>
                <div class="comment-body">
                    <div class="comment-header">
                        <span class="comment-author">{comment.author_email.clone()}</span>
                        <span class="comment-time">{when}</span>
                    </div>
                    <Show
                        when=is_editing.clone()
                        fallback=move || view! { <p class="comment-content">{body.clone()}</p> }
                    >
                        <textarea
                            class="comment-edit"
                            prop:value=move || edit.with(|e| e.buffer.clone())
                            on:input=move |ev| edit.update(|e| e.buffer = event_target_value(&ev))
                        ></textarea>
                        <div class="comment-edit-actions">
                            <button
                                class="btn-primary"
                                disabled=move || update.loading().get()
                                on:click=move |_| save_edit()
                            >
                                {move || if update.loading().get() { "Saving..." } else { "Save" }}
                            </button>
                            <button class="btn-secondary" on:click=move |_| cancel_edit()>"Cancel"</button>
                        </div>
                    </Show>
                    {is_own.then(|| {
                        let delete_id = delete_id.clone();
                        let edit_comment = edit_comment.clone();
                        let is_editing = is_editing.clone();
                        view! {
                            <Show when=move || !is_editing()>
                                <div class="comment-actions">
                                    {
                                        let c = edit_comment.clone();
                                        view! { <button class="btn-ghost" on:click=move |_| start_edit(&c)>"Edit"</button> }
                                    }
                                    {
                                        let id = delete_id.clone();
                                        view! {
                                            <DeleteConfirmButton
                                                button_class="btn-ghost danger"
                                                on_confirm=Callback::new(move |_| remove(id.clone()))
                                            />
                                        }
                                    }
                                </div>
                            </Show>
                        }
                    })}
                </div>
            </li>
        }
    };

    let thread = move || {
        let state = ListState::select(
            comments.data.get().as_ref(),
            comments.loading.get(),
            comments.error.get().as_deref(),
        );
        match state {
            ListState::Loading => view! { <LoadingState message="Loading comments..." /> }.into_any(),
            ListState::Error(message) => view! {
                <ErrorState message=message on_retry=Callback::new(move |_| comments.refetch()) />
            }
            .into_any(),
            ListState::Empty => view! {
                <p class="comments-empty">"No comments yet. Start the conversation."</p>
            }
            .into_any(),
            ListState::Ready(list) => view! {
                <ul class="comment-list">{list.into_iter().map(render_comment).collect_view()}</ul>
            }
            .into_any(),
        }
    };

    let count = move || comments.data.with(|d| d.as_ref().map(Vec::len).unwrap_or(0));

    view! {
        <section class="comments">
            <h3>"Comments (" {count} ")"</h3>
            {thread}
            <form class="comment-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Your email"
                    prop:value=move || author.get()
                    on:input=move |ev| set_author.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Add a comment..."
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
                {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button type="submit" class="btn-primary" disabled=move || create.loading().get()>
                    {move || if create.loading().get() { "Posting..." } else { "Post Comment" }}
                </button>
            </form>
        </section>
    }
}
