use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReasonCardProps {
    pub icon: Html,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

/// Icon + heading + body card used by the home view's vision grid.
#[function_component(ReasonCard)]
pub fn reason_card(props: &ReasonCardProps) -> Html {
    html! {
        <div class="reason-card">
            <div class="reason-icon-wrap">{ props.icon.clone() }</div>
            <div class="reason-head">
                <h3>{ &props.title }</h3>
                <p class="reason-subtitle">{ &props.subtitle }</p>
            </div>
            <p class="reason-description">{ &props.description }</p>
        </div>
    }
}
