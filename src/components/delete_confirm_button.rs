//! Two-step delete: the first press arms, a second press confirms.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ConfirmStep {
    #[default]
    Idle,
    Asking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Arm,
    Confirm,
    Dismiss,
}

impl ConfirmStep {
    /// Next step, and whether the deletion should fire
    fn press(self, press: Press) -> (Self, bool) {
        match (self, press) {
            (Self::Idle, Press::Arm) => (Self::Asking, false),
            (Self::Asking, Press::Confirm) => (Self::Idle, true),
            _ => (Self::Idle, false),
        }
    }
}

/// Delete control for cards and page headers.
///
/// `busy` disables it while a deletion is in flight; clicks never reach
/// the enclosing card.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(optional)] busy: Option<Signal<bool>>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let step = RwSignal::new(ConfirmStep::default());
    let busy = move || busy.is_some_and(|b| b.get());

    let press = move |ev: web_sys::MouseEvent, press: Press| {
        ev.stop_propagation();
        let (next, fire) = step.get_untracked().press(press);
        step.set(next);
        if fire {
            on_confirm.run(());
        }
    };

    move || match step.get() {
        ConfirmStep::Idle => {
            let label = label.clone();
            view! {
                <button
                    class=button_class.clone()
                    disabled=busy
                    on:click=move |ev| press(ev, Press::Arm)
                >
                    {move || if busy() { "Deleting...".to_string() } else { label.clone() }}
                </button>
            }
            .into_any()
        }
        ConfirmStep::Asking => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" on:click=move |ev| press(ev, Press::Confirm)>"Yes"</button>
                <button class="cancel-btn" on:click=move |ev| press(ev, Press::Dismiss)>"No"</button>
            </span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_armed_confirm_fires() {
        let (armed, fired) = ConfirmStep::Idle.press(Press::Arm);
        assert_eq!((armed, fired), (ConfirmStep::Asking, false));
        assert_eq!(armed.press(Press::Confirm), (ConfirmStep::Idle, true));
        assert_eq!(armed.press(Press::Dismiss), (ConfirmStep::Idle, false));
        assert_eq!(ConfirmStep::Idle.press(Press::Confirm), (ConfirmStep::Idle, false));
    }
}
