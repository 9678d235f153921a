//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Generic over the dragged key `K` and the drop target `T`.

use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::{set_timeout, window_event_listener};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
pub struct DndSignals<K, T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Key being dragged (set once the threshold is crossed)
    pub dragging: RwSignal<Option<K>>,
    /// Target currently hovered while dragging
    pub drop_target: RwSignal<Option<T>>,
    /// True for a short moment after a drag ends, to swallow the click
    pub drag_just_ended: RwSignal<bool>,
    /// Pending key (mousedown but not yet dragging)
    pub pending: RwSignal<Option<K>>,
    /// Start position for movement detection
    pub start: RwSignal<(i32, i32)>,
}

impl<K, T> Clone for DndSignals<K, T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, T> Copy for DndSignals<K, T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
}

impl<K, T> DndSignals<K, T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn is_dragging(&self, key: &K) -> bool {
        self.dragging.with(|d| d.as_ref() == Some(key))
    }

    pub fn is_drop_target(&self, target: &T) -> bool {
        self.drop_target.with(|t| t.as_ref() == Some(target))
    }

    pub fn any_dragging(&self) -> bool {
        self.dragging.with(Option::is_some)
    }
}

pub fn create_dnd_signals<K, T>() -> DndSignals<K, T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    DndSignals {
        dragging: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

/// Whether the pointer moved far enough from `start` to begin a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag<K, T>(dnd: &DndSignals<K, T>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let was_dragging = dnd.dragging.get_untracked().is_some();
    dnd.dragging.set(None);
    dnd.drop_target.set(None);
    dnd.pending.set(None);

    if was_dragging {
        dnd.drag_just_ended.set(true);
        let clear = dnd.drag_just_ended;
        set_timeout(
            move || {
                let _ = clear.try_set(false);
            },
            Duration::from_millis(100),
        );
    }
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<K, T>(dnd: DndSignals<K, T>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Form controls keep their own mouse behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
            {
                return;
            }
        }
        dnd.pending.set(Some(key.clone()));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<K, T>(dnd: DndSignals<K, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.drop_target.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K, T>(dnd: DndSignals<K, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.drop_target.set(None);
        }
    }
}

/// Bind window mousemove/mouseup handlers for the lifetime of the
/// current reactive owner. `on_drop` fires once per completed drag.
pub fn bind_global_handlers<K, T, F>(dnd: DndSignals<K, T>, on_drop: F)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(K, T) + 'static,
{
    let move_handle = window_event_listener(ev::mousemove, move |ev| {
        let Some(pending) = dnd.pending.try_get_untracked().flatten() else {
            return;
        };
        if dnd.dragging.get_untracked().is_some() {
            return;
        }
        if exceeds_threshold(dnd.start.get_untracked(), (ev.client_x(), ev.client_y())) {
            dnd.dragging.set(Some(pending));
        }
    });

    let up_handle = window_event_listener(ev::mouseup, move |_ev| {
        let Some(dragging) = dnd.dragging.try_get_untracked() else {
            return;
        };
        let drop_target = dnd.drop_target.get_untracked();
        end_drag(&dnd);
        // A plain click leaves both unset; the click event fires on the element
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            on_drop(dragged, target);
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_not_crossed_within_five_pixels() {
        assert!(!exceeds_threshold((100, 100), (105, 95)));
        assert!(!exceeds_threshold((0, 0), (0, 0)));
    }

    #[test]
    fn test_threshold_crossed_on_either_axis() {
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 94)));
    }
}
