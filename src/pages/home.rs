use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{
    AlertCircleIcon, InstagramIcon, LayersIcon, MoveUpRightIcon, ShieldCheckIcon,
    TrendingUpIcon, UsersIcon, XIcon,
};
use crate::components::reason_card::ReasonCard;
use crate::controller::ViewController;
use crate::state::{anchor, ScrollTarget, View};

const INSTAGRAM_URL: &str = "https://www.instagram.com/itachi_okinawa/";
const X_URL: &str = "https://x.com/IbukiKubot33";

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub controller: ViewController,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let to_contact = props
        .controller
        .on_transition(View::Contact, ScrollTarget::Top);
    let to_sns = props
        .controller
        .on_transition(View::Sns, ScrollTarget::Anchor(anchor::SNS_DETAIL_START));
    let to_web = props
        .controller
        .on_transition(View::Web, ScrollTarget::Anchor(anchor::WEB_DETAIL_START));

    html! {
        <div class="home-view">
            <style>
                {r#"
                .home-view .hero {
                    position: relative;
                    min-height: 85vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 5rem 3rem 0;
                    overflow: hidden;
                }
                .home-view .hero-video-wrap {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .home-view .hero-video-wrap video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.6;
                    filter: grayscale(0.5);
                }
                .home-view .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #050505, rgba(0, 0, 0, 0.6));
                }
                .home-view .hero-content {
                    position: relative;
                    z-index: 1;
                }
                .home-view .hero h1 {
                    font-size: clamp(3rem, 8vw, 7rem);
                    line-height: 1.1;
                    letter-spacing: -0.04em;
                    margin-bottom: 2.5rem;
                }
                .home-view .hero h1 .accent {
                    background: linear-gradient(90deg, #60a5fa, #1d4ed8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .home-view .hero-lead {
                    border-top: 1px solid #404040;
                    padding-top: 2.5rem;
                    max-width: 40rem;
                    color: #d4d4d4;
                    font-size: 1.1rem;
                    line-height: 1.9;
                }
                .home-view .hero-lead .underlined {
                    color: #fff;
                    font-weight: 700;
                    border-bottom: 1px solid #2563eb;
                    padding-bottom: 2px;
                }
                .home-view section {
                    padding: 7rem 3rem;
                }
                .home-view .section-label {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #3b82f6;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    font-size: 0.85rem;
                    margin-bottom: 1rem;
                }
                .home-view .section-label .label-icon {
                    width: 1.4rem;
                    height: 1.4rem;
                }
                .home-view h2.section-title {
                    font-size: clamp(2.2rem, 5vw, 3.8rem);
                    letter-spacing: -0.03em;
                    margin-bottom: 1.5rem;
                }
                .home-view h2.section-title .muted { color: #737373; }
                .home-view .section-lead {
                    color: #a3a3a3;
                    font-size: 1.1rem;
                    line-height: 1.9;
                    max-width: 44rem;
                }
                .home-view .reason-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 1.5rem;
                    max-width: 80rem;
                    margin: 4rem auto 0;
                }
                .home-view .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 1.5rem;
                    max-width: 70rem;
                    margin: 4rem auto 0;
                }
                .home-view .service-card {
                    background: #171717;
                    border: 1px solid #262626;
                    border-radius: 2rem;
                    padding: 2.5rem;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    transition: border-color 0.4s, background 0.4s;
                }
                .home-view .service-card:hover {
                    border-color: #525252;
                    background: #1c1c1c;
                }
                .home-view .service-card h3 {
                    font-size: 1.8rem;
                    letter-spacing: -0.02em;
                }
                .home-view .service-card .service-tag {
                    color: #3b82f6;
                    font-size: 0.8rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }
                .home-view .service-card p { color: #a3a3a3; line-height: 1.8; flex: 1; }
                .home-view .service-link {
                    align-self: flex-start;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: 1px solid #404040;
                    color: #fff;
                    font-weight: 700;
                    padding: 0.9rem 1.8rem;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: border-color 0.3s, background 0.3s;
                }
                .home-view .service-link:hover { border-color: #2563eb; background: rgba(37, 99, 235, 0.1); }
                .home-view .link-icon { width: 0.9rem; height: 0.9rem; }
                .home-view .sns-section {
                    border-top: 1px solid #171717;
                    padding-top: 6rem;
                    padding-bottom: 6rem;
                }
                .home-view .sns-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2.5rem;
                }
                .home-view .sns-inner h2 { font-size: 2rem; letter-spacing: -0.03em; margin-bottom: 0.75rem; }
                .home-view .sns-inner .sns-note { color: #737373; font-size: 0.9rem; }
                .home-view .sns-cards { display: flex; gap: 1.5rem; }
                .home-view .sns-card {
                    width: 10rem;
                    height: 10rem;
                    background: #171717;
                    border: 1px solid #262626;
                    border-radius: 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: #d4d4d4;
                    font-weight: 700;
                    font-size: 0.9rem;
                    text-decoration: none;
                    transition: border-color 0.3s, transform 0.3s;
                }
                .home-view .sns-card:hover { border-color: #525252; transform: translateY(-4px); }
                .home-view .sns-card .sns-icon { width: 2.5rem; height: 2.5rem; color: #a3a3a3; }
                .home-view .sns-card.instagram:hover .sns-icon { color: #ec4899; }
                .home-view .sns-card.x:hover .sns-icon { color: #fff; }
                .home-view footer {
                    border-top: 1px solid #171717;
                    padding: 6rem 3rem 3rem;
                }
                .home-view footer h2 {
                    font-size: clamp(2.2rem, 5vw, 3.8rem);
                    line-height: 1;
                    letter-spacing: -0.03em;
                    margin-bottom: 2rem;
                }
                .home-view footer h2 .accent { color: #2563eb; }
                .home-view footer .footer-lead { color: #a3a3a3; line-height: 1.9; margin-bottom: 2rem; }
                .home-view .footer-bottom {
                    border-top: 1px solid #171717;
                    margin-top: 5rem;
                    padding-top: 2rem;
                    color: #525252;
                    font-size: 0.85rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                }
                @media (max-width: 768px) {
                    .home-view .hero { padding: 5rem 1.5rem 0; }
                    .home-view section { padding: 5rem 1.5rem; }
                    .home-view footer { padding: 5rem 1.5rem 2rem; }
                }
                "#}
            </style>

            <header class="hero">
                <div class="hero-video-wrap">
                    <video autoplay=true loop=true muted=true playsinline=true>
                        <source
                            src="https://videos.pexels.com/video-files/3121459/3121459-uhd_2560_1440_24fps.mp4"
                            type="video/mp4"
                        />
                    </video>
                    <div class="hero-overlay"></div>
                </div>
                <div class="hero-content">
                    <FadeIn>
                        <h1>
                            {"沖縄の集客を、"}<br />
                            {"SNSで"}<br />
                            <span class="accent">{"変革する。"}</span>
                        </h1>
                    </FadeIn>
                    <FadeIn delay_ms={200}>
                        <p class="hero-lead">
                            {"「いいモノを作れば売れる」時代は終わりました。"}<br />
                            {"どんなに良いサービスも、知られなければ「ない」のと同じです。"}<br />
                            <span class="underlined">
                                {"SNSで認知を広げ、御社を「選ばれる」企業へと変革します。"}
                            </span>
                        </p>
                    </FadeIn>
                </div>
            </header>

            <section id={anchor::VISION}>
                <FadeIn>
                    <div class="section-label">
                        <AlertCircleIcon class="label-icon" />
                        <span>{"Critical Issue"}</span>
                    </div>
                    <h2 class="section-title">
                        {"Why Now? "}<span class="muted">{"企業の生存戦略として"}</span>
                    </h2>
                    <p class="section-lead">
                        {"技術や品質だけでは差別化できない今、"}<br />
                        {"SNSを持たないことは「機会損失」ではなく「リスク」そのものです。"}
                    </p>
                </FadeIn>

                <div class="reason-grid">
                    <FadeIn delay_ms={0}>
                        <ReasonCard
                            icon={html! { <UsersIcon class="reason-icon" /> }}
                            title="求人費用の削減・採用強化"
                            subtitle="Recruiting"
                            description="今の求職者は、HPよりも先にSNSを見ます。働く人の顔が見えない企業は選択肢に入りません。SNSはコストをかけず、熱量の高い人材を引き寄せる最強の採用ツールになります。"
                        />
                    </FadeIn>
                    <FadeIn delay_ms={100}>
                        <ReasonCard
                            icon={html! { <ShieldCheckIcon class="reason-icon" /> }}
                            title="信頼と透明性の証明"
                            subtitle="Trust & Transparency"
                            description="更新の止まったHPは、逆に不信感を与えます。リアルタイムに動いているSNSこそが「今、活動している」という証明になり、顧客や取引先への信頼構築に直結します。"
                        />
                    </FadeIn>
                    <FadeIn delay_ms={200}>
                        <ReasonCard
                            icon={html! { <TrendingUpIcon class="reason-icon" /> }}
                            title="脱・下請け体質"
                            subtitle="Direct Business"
                            description="認知が広がれば、仕事は「待つ」ものから「選ぶ」ものへ。元請け企業やエンドユーザーからの直接指名を増やし、利益率の高い案件を獲得できる体質へ改善します。"
                        />
                    </FadeIn>
                    <FadeIn delay_ms={300}>
                        <ReasonCard
                            icon={html! { <LayersIcon class="reason-icon" /> }}
                            title="広告は消費、SNSは資産"
                            subtitle="Stock Asset"
                            description="広告費を止めれば集客も止まりますが、SNSで積み上げたフォロワーとコンテンツは消えません。将来にわたって集客し続ける、御社だけの「資産」となります。"
                        />
                    </FadeIn>
                </div>
            </section>

            <section id={anchor::SERVICES}>
                <FadeIn>
                    <h2 class="section-title">
                        {"Services "}<span class="muted">{"2つの提供メニュー"}</span>
                    </h2>
                    <p class="section-lead">
                        {"SNS運用代行と、サブスク型のホームページ制作。"}
                        {"どちらも企画から制作・運用まで一貫してお任せいただけます。"}
                    </p>
                </FadeIn>

                <div class="service-grid">
                    <FadeIn delay_ms={0}>
                        <div class="service-card">
                            <span class="service-tag">{"SNS Management"}</span>
                            <h3>{"SNS運用代行"}</h3>
                            <p>
                                {"アカウント設計から動画の企画・撮影・編集、投稿運用まで丸ごと代行。"}
                                {"集客と採用につながるアカウントを育てます。"}
                            </p>
                            <button class="service-link" onclick={to_sns}>
                                {"詳しく見る"}
                                <MoveUpRightIcon class="link-icon" />
                            </button>
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={150}>
                        <div class="service-card">
                            <span class="service-tag">{"Web Subscription"}</span>
                            <h3>{"サブスク型ホームページ"}</h3>
                            <p>
                                {"初期費用を抑えた月額制のホームページ制作・保守。"}
                                {"制作して終わりではなく、更新と改善を続けるWebの顧問です。"}
                            </p>
                            <button class="service-link" onclick={to_web}>
                                {"詳しく見る"}
                                <MoveUpRightIcon class="link-icon" />
                            </button>
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section id={anchor::SNS_LINKS} class="sns-section">
                <FadeIn>
                    <div class="sns-inner">
                        <div>
                            <h2>{"Official SNS"}</h2>
                            <p class="sns-note">{"最新情報や実績をチェック"}</p>
                        </div>
                        <div class="sns-cards">
                            <a
                                href={INSTAGRAM_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="sns-card instagram"
                            >
                                <InstagramIcon class="sns-icon" />
                                <span>{"Instagram"}</span>
                            </a>
                            <a
                                href={X_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="sns-card x"
                            >
                                <XIcon class="sns-icon" />
                                <span>{"X (Twitter)"}</span>
                            </a>
                        </div>
                    </div>
                </FadeIn>
            </section>

            <footer>
                <FadeIn>
                    <h2>
                        {"TRANZIA"}<br />
                        <span class="accent">{"Your Partner."}</span>
                    </h2>
                    <p class="footer-lead">
                        {"まずは現在の課題をお聞かせください。"}<br />
                        {"最適なプランと戦略を、オーダーメイドでご提案します。"}
                    </p>
                    <button class="contact-cta" onclick={to_contact}>
                        {"無料相談を予約する"}
                        <MoveUpRightIcon class="link-icon" />
                    </button>
                    <div class="footer-bottom">
                        <span>{"© 2025 TRANZIA Inc."}</span>
                    </div>
                </FadeIn>
            </footer>
        </div>
    }
}
