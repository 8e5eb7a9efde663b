use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod controller;
mod meta;
mod state;
mod visibility;

mod components {
    pub mod fade_in;
    pub mod icons;
    pub mod pricing_card;
    pub mod reason_card;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod sns;
    pub mod web;
}

use controller::ViewController;
use pages::{contact::Contact, home::Home, sns::SnsDetail, web::WebDetail};
use state::{anchor, ScrollTarget, View};

fn render_view(controller: &ViewController) -> Html {
    match controller.current() {
        View::Home => {
            info!("Rendering home view");
            html! { <Home controller={controller.clone()} /> }
        }
        View::Sns => {
            info!("Rendering SNS detail view");
            html! { <SnsDetail controller={controller.clone()} /> }
        }
        View::Web => {
            info!("Rendering web subscription detail view");
            html! { <WebDetail controller={controller.clone()} /> }
        }
        View::Contact => {
            info!("Rendering contact view");
            html! { <Contact controller={controller.clone()} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub controller: ViewController,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // nav links close the mobile menu before acting
    let nav_to = |id: &'static str| {
        let controller = props.controller.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            controller.navigate(id);
        })
    };

    let go_home = {
        let controller = props.controller.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            controller.transition_to(View::Home, ScrollTarget::Top);
        })
    };

    let go_contact = {
        let controller = props.controller.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            controller.transition_to(View::Contact, ScrollTarget::Top);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <span class="nav-logo" onclick={go_home}>
                    {"TRANZIA"}<span class="logo-dot">{"."}</span>
                </span>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <button class="nav-link" onclick={nav_to(anchor::VISION)}>
                        {"Vision"}
                    </button>
                    <button class="nav-link" onclick={nav_to(anchor::SERVICES)}>
                        {"Services"}
                    </button>
                    <button class="nav-link" onclick={nav_to(anchor::SNS_LINKS)}>
                        {"SNS"}
                    </button>
                    <button class="nav-cta" onclick={go_contact}>
                        {"無料相談を予約する"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Styles shared across views: page base, nav, fade-in regions, the detail
/// view skeleton and pricing cards used by both service pages.
const GLOBAL_STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    background: #050505;
    color: #fff;
    font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Hiragino Kaku Gothic ProN, Meiryo, sans-serif;
    -webkit-font-smoothing: antialiased;
    overflow-x: hidden;
}
button { font-family: inherit; }
::selection { background: rgba(59, 130, 246, 0.3); color: #bfdbfe; }

.fade-in-region {
    opacity: 0;
    transform: translateY(3rem);
    transition: opacity 1s ease-out, transform 1s ease-out;
}
.fade-in-region.visible {
    opacity: 1;
    transform: translateY(0);
}

.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1.5rem 3rem;
    border-bottom: 1px solid transparent;
    transition: background 0.5s, border-color 0.5s;
}
.top-nav.scrolled {
    background: rgba(5, 5, 5, 0.8);
    backdrop-filter: blur(12px);
    border-color: #262626;
}
.nav-content {
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    font-size: 1.25rem;
    font-weight: 700;
    letter-spacing: -0.03em;
    cursor: pointer;
}
.nav-logo .logo-dot { color: #2563eb; }
.nav-right { display: flex; align-items: center; gap: 1.5rem; }
.nav-link {
    background: none;
    border: none;
    color: #a3a3a3;
    font-size: 0.9rem;
    font-weight: 700;
    cursor: pointer;
    transition: color 0.3s;
}
.nav-link:hover { color: #fff; }
.nav-cta {
    background: #2563eb;
    color: #fff;
    border: none;
    font-size: 0.9rem;
    font-weight: 700;
    padding: 0.8rem 1.5rem;
    border-radius: 9999px;
    cursor: pointer;
    box-shadow: 0 10px 15px -3px rgba(30, 58, 138, 0.4);
    transition: background 0.3s, transform 0.3s;
}
.nav-cta:hover { background: #3b82f6; transform: translateY(-2px); }
.burger-menu { display: none; background: none; border: none; cursor: pointer; }
.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    background: #fff;
    margin: 5px 0;
}
@media (max-width: 768px) {
    .top-nav { padding: 1.5rem; }
    .burger-menu { display: block; }
    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: rgba(5, 5, 5, 0.95);
        border-bottom: 1px solid #262626;
        padding: 1.5rem;
        flex-direction: column;
        align-items: stretch;
    }
    .nav-right.mobile-menu-open { display: flex; }
}

.back-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    background: none;
    border: none;
    color: #737373;
    font-weight: 700;
    font-size: 0.9rem;
    cursor: pointer;
    margin-bottom: 2rem;
    transition: color 0.3s;
}
.back-link:hover { color: #fff; }
.back-icon { width: 1rem; height: 1rem; }

.contact-cta {
    display: inline-flex;
    align-items: center;
    gap: 0.6rem;
    background: #2563eb;
    color: #fff;
    border: none;
    padding: 1.2rem 3rem;
    border-radius: 9999px;
    font-weight: 700;
    font-size: 1.1rem;
    cursor: pointer;
    box-shadow: 0 20px 25px -5px rgba(30, 58, 138, 0.3);
    transition: background 0.3s, transform 0.3s;
}
.contact-cta:hover { background: #3b82f6; transform: translateY(-4px); }
.contact-cta .link-icon { width: 1rem; height: 1rem; }

.detail-view { padding-top: 6rem; }
.detail-view .detail-intro { padding: 2rem 3rem 5rem; max-width: 72rem; margin: 0 auto; }
.detail-view .detail-tag {
    display: inline-block;
    color: #3b82f6;
    font-size: 0.8rem;
    font-weight: 700;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    margin-bottom: 1rem;
}
.detail-view h1 {
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    letter-spacing: -0.03em;
    margin-bottom: 1.5rem;
}
.detail-view .detail-lead {
    color: #a3a3a3;
    font-size: 1.1rem;
    line-height: 2;
    max-width: 44rem;
    margin-bottom: 2rem;
}
.detail-view .jump-link {
    background: none;
    border: 1px solid #404040;
    color: #fff;
    font-weight: 700;
    padding: 0.9rem 1.8rem;
    border-radius: 9999px;
    cursor: pointer;
    transition: border-color 0.3s, background 0.3s;
}
.detail-view .jump-link:hover { border-color: #2563eb; background: rgba(37, 99, 235, 0.1); }
.detail-view .detail-points {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 1.5rem;
    margin-top: 4rem;
}
.detail-view .point-card {
    background: #171717;
    border: 1px solid #262626;
    border-radius: 1.5rem;
    padding: 2rem;
    height: 100%;
}
.detail-view .point-card h3 { font-size: 1.25rem; margin-bottom: 1rem; letter-spacing: -0.02em; }
.detail-view .point-card p { color: #a3a3a3; font-size: 0.95rem; line-height: 1.9; }
.detail-view .pricing-section { background: #0a0a0a; padding: 7rem 3rem; }
.detail-view .pricing-head {
    border-bottom: 1px solid #262626;
    padding-bottom: 2rem;
    margin-bottom: 4rem;
    max-width: 80rem;
    margin-left: auto;
    margin-right: auto;
}
.detail-view .pricing-head h2 {
    font-size: clamp(3rem, 8vw, 6rem);
    letter-spacing: -0.04em;
    margin-bottom: 1rem;
}
.detail-view .pricing-head p { color: #a3a3a3; font-size: 1.1rem; }
.detail-view .pricing-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
    max-width: 80rem;
    margin: 0 auto;
    align-items: stretch;
}
.detail-view .grid-cell { height: 100%; }
.detail-view .tax-note {
    text-align: center;
    color: #737373;
    font-size: 0.8rem;
    margin-top: 3rem;
}
.detail-view .detail-cta { text-align: center; padding: 7rem 3rem; }
.detail-view .detail-cta h2 { font-size: 2.2rem; letter-spacing: -0.03em; margin-bottom: 1rem; }
.detail-view .detail-cta p { color: #a3a3a3; margin-bottom: 2.5rem; }

.pricing-card {
    position: relative;
    display: flex;
    flex-direction: column;
    height: 100%;
    background: #171717;
    border: 1px solid #262626;
    border-radius: 1.5rem;
    padding: 2.5rem;
    overflow: hidden;
    transition: border-color 0.5s, background 0.5s, transform 0.5s;
}
.pricing-card:hover { border-color: #404040; background: #1c1c1c; }
.pricing-card.highlight {
    border-color: rgba(30, 58, 138, 0.5);
    box-shadow: 0 25px 50px -12px rgba(30, 58, 138, 0.2);
    transform: translateY(-8px);
}
.pricing-card .highlight-bar {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    background: #2563eb;
    box-shadow: 0 0 20px rgba(37, 99, 235, 0.5);
}
.pricing-card .card-head { border-bottom: 1px solid #262626; padding-bottom: 2rem; margin-bottom: 2rem; }
.pricing-card .tier-row { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 1rem; }
.pricing-card .tier-badge {
    font-size: 0.65rem;
    font-weight: 700;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    padding: 0.3rem 0.8rem;
    border-radius: 9999px;
    border: 1px solid #404040;
    color: #737373;
}
.pricing-card.highlight .tier-badge {
    border-color: rgba(59, 130, 246, 0.3);
    color: #60a5fa;
    background: rgba(59, 130, 246, 0.1);
}
.pricing-card .recommended-badge {
    font-size: 0.65rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    background: #2563eb;
    color: #fff;
    padding: 0.3rem 0.6rem;
    border-radius: 0.25rem;
    box-shadow: 0 10px 15px -3px rgba(37, 99, 235, 0.3);
}
.pricing-card .card-title { font-size: 2.2rem; letter-spacing: -0.02em; margin-bottom: 0.5rem; }
.pricing-card .level-jp { font-size: 0.9rem; font-weight: 700; color: #a3a3a3; margin-bottom: 1.5rem; }
.pricing-card .price-row { display: flex; align-items: baseline; gap: 0.25rem; margin-bottom: 1rem; }
.pricing-card .price { font-size: 2.2rem; font-weight: 700; letter-spacing: -0.02em; }
.pricing-card .price-note { font-size: 0.85rem; color: #737373; }
.pricing-card .period-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.8rem;
    border-radius: 0.5rem;
    background: rgba(38, 38, 38, 0.5);
    border: 1px solid #262626;
}
.pricing-card.highlight .period-row {
    background: rgba(30, 58, 138, 0.2);
    border-color: rgba(59, 130, 246, 0.3);
}
.pricing-card .period-label { font-size: 0.75rem; font-weight: 700; color: #a3a3a3; }
.pricing-card .period-value { font-size: 0.9rem; font-weight: 700; }
.pricing-card.highlight .period-value { color: #60a5fa; }
.pricing-card .card-body { flex: 1; display: flex; flex-direction: column; }
.pricing-card .card-description {
    font-size: 0.9rem;
    line-height: 1.8;
    color: #a3a3a3;
    margin-bottom: 2rem;
    min-height: 3em;
}
.pricing-card .feature-block { margin-top: auto; }
.pricing-card .feature-heading {
    font-size: 0.65rem;
    font-weight: 700;
    color: #525252;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    border-bottom: 1px solid #262626;
    padding-bottom: 0.5rem;
    margin-bottom: 1rem;
}
.pricing-card .feature-list { list-style: none; display: flex; flex-direction: column; gap: 0.75rem; }
.pricing-card .feature-list li {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    font-size: 0.9rem;
    color: #d4d4d4;
}
.pricing-card .check-dot {
    flex-shrink: 0;
    width: 1rem;
    height: 1rem;
    margin-top: 2px;
    border-radius: 50%;
    background: #262626;
    border: 1px solid #404040;
    display: flex;
    align-items: center;
    justify-content: center;
}
.pricing-card .check-icon { width: 0.6rem; height: 0.6rem; color: #a3a3a3; }

.reason-card {
    background: #171717;
    border: 1px solid #262626;
    border-radius: 2rem;
    padding: 2.5rem;
    height: 100%;
    display: flex;
    flex-direction: column;
    transition: border-color 0.5s, background 0.5s;
}
.reason-card:hover { border-color: #525252; background: #262626; }
.reason-card .reason-icon-wrap {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 1rem;
    background: #262626;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 2rem;
    transition: background 0.5s, color 0.5s;
}
.reason-card:hover .reason-icon-wrap { background: #fff; color: #000; }
.reason-card .reason-icon { width: 1.5rem; height: 1.5rem; color: #a3a3a3; }
.reason-card:hover .reason-icon { color: #000; }
.reason-card h3 { font-size: 1.5rem; letter-spacing: -0.02em; margin-bottom: 0.5rem; }
.reason-card .reason-subtitle {
    font-size: 0.75rem;
    font-weight: 700;
    color: #737373;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-bottom: 1rem;
}
.reason-card:hover .reason-subtitle { color: #60a5fa; }
.reason-card .reason-description {
    color: #a3a3a3;
    font-size: 0.95rem;
    line-height: 1.9;
    margin-top: auto;
}
"#;

#[function_component]
fn App() -> Html {
    let view = use_state(View::default);
    let pending = use_mut_ref(|| None::<Timeout>);
    let controller = ViewController::new(view.clone(), pending);

    // title + meta tags once on mount
    use_effect_with_deps(
        move |_| {
            meta::install();
            || ()
        },
        (),
    );

    html! {
        <>
            <style>{ GLOBAL_STYLE }</style>
            <Nav controller={controller.clone()} />
            { render_view(&controller) }
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
