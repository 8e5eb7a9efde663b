//! First-viewport-entry detection for the fade-in regions. Each region owns
//! one observer; the flag it feeds is a one-way latch that never resets, even
//! if the region scrolls back out of view.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-way visibility flag. Starts unset and can only ever be latched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    pub fn latched() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn latch(&mut self) {
        self.visible = true;
    }
}

/// A live intersection observation on one region. Disconnects itself after
/// the first qualifying intersection; dropping it disconnects unconditionally
/// so an unmount with the latch still unset never leaks the callback.
pub struct RegionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RegionObserver {
    /// Observe `region` at the given visibility fraction; `on_visible` fires
    /// exactly once, on the first intersection meeting the threshold.
    pub fn start(
        region: &Element,
        threshold: f64,
        on_visible: impl Fn() + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if intersecting {
                    on_visible();
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(region);

        Some(Self { observer, _callback: callback })
    }
}

impl Drop for RegionObserver {
    fn drop(&mut self) {
        // Safe to call after the first-hit disconnect; idempotent.
        self.observer.disconnect();
    }
}

/// Hook form: attach the tracker to whatever element receives the returned
/// ref, and read the latch as a plain bool. Independent per call site.
#[hook]
pub fn use_on_screen(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let latch = use_state(VisibilityLatch::default);

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|region| {
                    RegionObserver::start(&region, threshold, move || {
                        latch.set(VisibilityLatch::latched());
                    })
                });
                // cleanup on unmount detaches the observer, latched or not
                move || drop(observer)
            },
            node.clone(),
        );
    }

    (node, latch.is_visible())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_unset() {
        assert!(!VisibilityLatch::default().is_visible());
    }

    #[test]
    fn latch_is_one_way() {
        let mut latch = VisibilityLatch::default();
        latch.latch();
        assert!(latch.is_visible());
        // repeated intersection events only ever re-latch
        latch.latch();
        latch.latch();
        assert!(latch.is_visible());
        assert_eq!(latch, VisibilityLatch::latched());
    }

    #[test]
    fn latches_are_independent() {
        let mut first = VisibilityLatch::default();
        let second = VisibilityLatch::default();
        first.latch();
        assert!(first.is_visible());
        assert!(!second.is_visible());
    }
}
