use yew::prelude::*;

use crate::components::icons::CheckIcon;

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: String,
    pub level_jp: String,
    pub title: String,
    /// Monthly price, pre-formatted (e.g. "300,000").
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let card_class = if props.highlight {
        "pricing-card highlight"
    } else {
        "pricing-card"
    };

    html! {
        <div class={card_class}>
            if props.highlight {
                <div class="highlight-bar"></div>
            }

            <div class="card-head">
                <div class="tier-row">
                    <span class="tier-badge">{ &props.tier }</span>
                    if props.highlight {
                        <span class="recommended-badge">{"RECOMMENDED"}</span>
                    }
                </div>
                <h3 class="card-title">{ &props.title }</h3>
                <p class="level-jp">{ &props.level_jp }</p>
                <div class="price-row">
                    <span class="price">{ format!("¥{}", props.price) }</span>
                    <span class="price-note">{"/月 (税別)"}</span>
                </div>
                <div class="period-row">
                    <span class="period-label">{"契約期間"}</span>
                    <span class="period-value">{ &props.period }</span>
                </div>
            </div>

            <div class="card-body">
                <p class="card-description">{ &props.description }</p>
                <div class="feature-block">
                    <div class="feature-heading">{"All Plans Include"}</div>
                    <ul class="feature-list">
                        { for props.features.iter().map(|feature| html! {
                            <li>
                                <span class="check-dot"><CheckIcon class="check-icon" /></span>
                                <span>{ feature }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}
