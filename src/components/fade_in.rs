use yew::prelude::*;

use crate::visibility::use_on_screen;

/// Fraction of a region that must be on screen before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub children: Children,
    /// Stagger offset for grids where cards reveal one after another.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Wrapper that slides/fades its children in the first time they scroll into
/// the viewport. Each instance watches only its own region; once revealed it
/// stays revealed.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let (region, visible) = use_on_screen(REVEAL_THRESHOLD);

    html! {
        <div
            ref={region}
            class={classes!("fade-in-region", visible.then_some("visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
