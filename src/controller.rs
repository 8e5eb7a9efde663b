//! `ViewController` glues the pure transition planner in `state` to the
//! document: it owns the root's view state handle and executes the deferred
//! post-transition scroll.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;

use crate::state::{plan_navigate, plan_transition, Navigate, ScrollAction, ScrollTarget, View};

/// Delay before the post-transition scroll fires, long enough for the new
/// view's render to commit so anchor lookup sees its markup.
const RENDER_SETTLE_MS: u32 = 120;

#[derive(Clone)]
pub struct ViewController {
    view: UseStateHandle<View>,
    // Pending deferred scroll. Replacing it drops the old Timeout, which
    // cancels it, so a superseding navigation never races a stale scroll.
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl PartialEq for ViewController {
    fn eq(&self, other: &Self) -> bool {
        *self.view == *other.view && Rc::ptr_eq(&self.pending, &other.pending)
    }
}

impl ViewController {
    pub fn new(view: UseStateHandle<View>, pending: Rc<RefCell<Option<Timeout>>>) -> Self {
        Self { view, pending }
    }

    pub fn current(&self) -> View {
        *self.view
    }

    /// Switch views, then scroll once the new markup has settled. The state
    /// update is synchronous from the planner's point of view; the scroll is
    /// deferred and best-effort.
    pub fn transition_to(&self, next: View, target: ScrollTarget) {
        let transition = plan_transition(next, target);
        self.view.set(transition.next);

        let timeout = transition
            .scroll
            .map(|action| Timeout::new(RENDER_SETTLE_MS, move || perform(action)));
        *self.pending.borrow_mut() = timeout;
    }

    /// Scroll to an anchor, switching to home first if the current view does
    /// not render it. The in-view case needs no settle delay.
    pub fn navigate(&self, id: &'static str) {
        match plan_navigate(self.current(), id) {
            Navigate::Scroll(action) => perform(action),
            Navigate::Switch(transition) => {
                self.transition_to(transition.next, ScrollTarget::Anchor(id))
            }
        }
    }

    /// Convenience for callbacks wired into `onclick` handlers.
    pub fn on_transition(&self, next: View, target: ScrollTarget) -> Callback<MouseEvent> {
        let controller = self.clone();
        Callback::from(move |_| controller.transition_to(next, target))
    }

    pub fn on_navigate(&self, id: &'static str) -> Callback<MouseEvent> {
        let controller = self.clone();
        Callback::from(move |_| controller.navigate(id))
    }
}

/// Execute a resolved scroll against the live document. A missing anchor is
/// a silent no-op: the view switch already happened and scroll-to-anchor is
/// best-effort.
fn perform(action: ScrollAction) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match action {
        ScrollAction::ToTop => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        ScrollAction::IntoView(id) => {
            let element = window.document().and_then(|doc| doc.get_element_by_id(id));
            if let Some(element) = element {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}
