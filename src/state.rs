//! Pure view/anchor state core. No DOM types in here so the whole module can
//! be unit tested natively; the DOM side lives in `controller`.

/// The mutually exclusive top-level content modes of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Sns,
    Web,
    Contact,
}

/// Named scroll targets. Anchor ids are view-local: `PRICING` exists in both
/// detail views and only ever resolves against the view being entered.
pub mod anchor {
    pub const VISION: &str = "vision";
    pub const SERVICES: &str = "services";
    pub const SNS_LINKS: &str = "sns-links";
    pub const SNS_DETAIL_START: &str = "sns-detail-start";
    pub const WEB_DETAIL_START: &str = "web-detail-start";
    pub const PRICING: &str = "pricing";
}

impl View {
    /// Anchor ids rendered by this view.
    pub fn anchors(self) -> &'static [&'static str] {
        match self {
            View::Home => &[anchor::VISION, anchor::SERVICES, anchor::SNS_LINKS],
            View::Sns => &[anchor::SNS_DETAIL_START, anchor::PRICING],
            View::Web => &[anchor::WEB_DETAIL_START, anchor::PRICING],
            View::Contact => &[],
        }
    }

    pub fn contains_anchor(self, id: &str) -> bool {
        self.anchors().contains(&id)
    }
}

/// Where a transition wants to end up once the new view has rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Anchor(&'static str),
}

/// A resolved scroll, ready to execute against the mounted document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    ToTop,
    IntoView(&'static str),
}

/// Outcome of a view transition: the next view plus the scroll to perform
/// after that view's markup exists. `scroll` is `None` when the requested
/// anchor is not part of the target view; the switch still happens and the
/// miss is silently absorbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: View,
    pub scroll: Option<ScrollAction>,
}

pub fn plan_transition(next: View, target: ScrollTarget) -> Transition {
    let scroll = match target {
        ScrollTarget::Top => Some(ScrollAction::ToTop),
        ScrollTarget::Anchor(id) if next.contains_anchor(id) => {
            Some(ScrollAction::IntoView(id))
        }
        ScrollTarget::Anchor(_) => None,
    };
    Transition { next, scroll }
}

/// Outcome of an in-page navigation request. Anchors already rendered by the
/// current view scroll immediately; anything else falls back to a home
/// transition carrying the anchor along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigate {
    Scroll(ScrollAction),
    Switch(Transition),
}

pub fn plan_navigate(current: View, id: &'static str) -> Navigate {
    if current.contains_anchor(id) {
        Navigate::Scroll(ScrollAction::IntoView(id))
    } else {
        Navigate::Switch(plan_transition(View::Home, ScrollTarget::Anchor(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_is_last_write_wins() {
        let mut view = View::default();
        assert_eq!(view, View::Home);
        for next in [View::Sns, View::Contact, View::Web, View::Home, View::Sns] {
            view = plan_transition(next, ScrollTarget::Top).next;
        }
        assert_eq!(view, View::Sns);
    }

    #[test]
    fn top_always_scrolls_to_offset_zero() {
        for view in [View::Home, View::Sns, View::Web, View::Contact] {
            let t = plan_transition(view, ScrollTarget::Top);
            assert_eq!(t.next, view);
            assert_eq!(t.scroll, Some(ScrollAction::ToTop));
        }
    }

    #[test]
    fn known_anchor_produces_into_view() {
        let t = plan_transition(View::Sns, ScrollTarget::Anchor(anchor::SNS_DETAIL_START));
        assert_eq!(t.next, View::Sns);
        assert_eq!(t.scroll, Some(ScrollAction::IntoView(anchor::SNS_DETAIL_START)));
    }

    #[test]
    fn foreign_anchor_switches_without_scrolling() {
        // `sns-links` belongs to home, not web
        let t = plan_transition(View::Web, ScrollTarget::Anchor(anchor::SNS_LINKS));
        assert_eq!(t.next, View::Web);
        assert_eq!(t.scroll, None);
    }

    #[test]
    fn pricing_resolves_per_view() {
        assert!(View::Sns.contains_anchor(anchor::PRICING));
        assert!(View::Web.contains_anchor(anchor::PRICING));
        assert!(!View::Home.contains_anchor(anchor::PRICING));

        let sns = plan_transition(View::Sns, ScrollTarget::Anchor(anchor::PRICING));
        let web = plan_transition(View::Web, ScrollTarget::Anchor(anchor::PRICING));
        assert_eq!(sns.scroll, Some(ScrollAction::IntoView(anchor::PRICING)));
        assert_eq!(web.scroll, Some(ScrollAction::IntoView(anchor::PRICING)));
    }

    #[test]
    fn navigate_within_current_view_scrolls_directly() {
        assert_eq!(
            plan_navigate(View::Home, anchor::SERVICES),
            Navigate::Scroll(ScrollAction::IntoView(anchor::SERVICES))
        );
        // back-nav anchors inside a detail view stay inside it
        assert_eq!(
            plan_navigate(View::Sns, anchor::PRICING),
            Navigate::Scroll(ScrollAction::IntoView(anchor::PRICING))
        );
    }

    #[test]
    fn navigate_elsewhere_falls_back_to_home() {
        assert_eq!(
            plan_navigate(View::Contact, anchor::VISION),
            Navigate::Switch(Transition {
                next: View::Home,
                scroll: Some(ScrollAction::IntoView(anchor::VISION)),
            })
        );
        // home never renders `pricing`, so the fallback switch drops the scroll
        assert_eq!(
            plan_navigate(View::Contact, anchor::PRICING),
            Navigate::Switch(Transition { next: View::Home, scroll: None })
        );
    }
}
