use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{ArrowLeftIcon, MoveUpRightIcon};
use crate::components::pricing_card::PricingCard;
use crate::controller::ViewController;
use crate::state::{anchor, ScrollTarget, View};

fn common_features() -> Vec<String> {
    [
        "企画・撮影・編集まで一貫対応",
        "アカウント設計・プロフィール最適化",
        "競合分析・ターゲット戦略策定",
        "月8本のショート動画制作",
        "月4本のフィード投稿",
        "基本的なハッシュタグ選定",
        "チャットサポート",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Properties, PartialEq)]
pub struct SnsDetailProps {
    pub controller: ViewController,
}

#[function_component(SnsDetail)]
pub fn sns_detail(props: &SnsDetailProps) -> Html {
    let back_home = props.controller.on_transition(View::Home, ScrollTarget::Top);
    let to_pricing = props.controller.on_navigate(anchor::PRICING);
    let to_contact = props
        .controller
        .on_transition(View::Contact, ScrollTarget::Top);

    html! {
        <div class="detail-view">
            <section id={anchor::SNS_DETAIL_START} class="detail-intro">
                <FadeIn>
                    <button class="back-link" onclick={back_home}>
                        <ArrowLeftIcon class="back-icon" />
                        {"ホームに戻る"}
                    </button>
                    <span class="detail-tag">{"SNS Management"}</span>
                    <h1>{"SNS運用代行"}</h1>
                    <p class="detail-lead">
                        {"「何を投稿すればいいかわからない」「続かない」——"}
                        {"SNS運用の一番の壁は継続です。TRANZIAは企画・撮影・編集・投稿・分析までを"}
                        {"まるごと引き受け、御社は本業に集中したまま認知を積み上げられます。"}
                    </p>
                    <button class="jump-link" onclick={to_pricing}>
                        {"料金プランを見る"}
                    </button>
                </FadeIn>

                <div class="detail-points">
                    <FadeIn delay_ms={0}>
                        <div class="point-card">
                            <h3>{"戦略から逆算した企画"}</h3>
                            <p>
                                {"フォロワー数ではなく「集客・採用につながるか」を基準に、"}
                                {"競合分析とターゲット設計から投稿テーマを組み立てます。"}
                            </p>
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={100}>
                        <div class="point-card">
                            <h3>{"撮影・編集も現地対応"}</h3>
                            <p>
                                {"沖縄県内なら撮影はお伺いします。現場の空気感が伝わる"}
                                {"ショート動画を、月8本ペースで制作・投稿します。"}
                            </p>
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={200}>
                        <div class="point-card">
                            <h3>{"数字で振り返る運用"}</h3>
                            <p>
                                {"毎月のレポートで保存率・リーチ・プロフィールアクセスを確認し、"}
                                {"翌月の企画に反映します。感覚ではなくデータで改善します。"}
                            </p>
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section id={anchor::PRICING} class="pricing-section">
                <FadeIn>
                    <div class="pricing-head">
                        <h2>{"Plans"}</h2>
                        <p>{"契約期間に応じて最適化された3つの戦略フェーズ。"}</p>
                    </div>
                </FadeIn>

                <div class="pricing-grid">
                    <FadeIn delay_ms={0} class="grid-cell">
                        <PricingCard
                            tier="Trial"
                            level_jp="短期検証・導入"
                            title="Trial"
                            price="300,000"
                            period="1ヶ月（単月）"
                            description="単月契約でリスクを最小化。運用フローの確認と、市場の初期反応をテストするフェーズ。"
                            features={common_features()}
                        />
                    </FadeIn>
                    <FadeIn delay_ms={200} class="grid-cell">
                        <PricingCard
                            tier="Core"
                            level_jp="基盤構築・定着"
                            title="Core"
                            price="250,000"
                            period="最低3ヶ月"
                            description="Trialより本格的、Standardへの足がかりとなる中間プラン。数字が動き始める3ヶ月間で確実な基盤を築きます。"
                            features={common_features()}
                        />
                    </FadeIn>
                    <FadeIn delay_ms={400} class="grid-cell">
                        <PricingCard
                            tier="Standard"
                            level_jp="資産化・成果最大化"
                            title="Standard"
                            price="200,000"
                            period="最低6ヶ月"
                            description="最も推奨される本命プラン。十分な期間をかけて分析と改善を繰り返し、投資対効果（ROI）を最大化します。"
                            highlight={true}
                            features={common_features()}
                        />
                    </FadeIn>
                </div>
                <p class="tax-note">{"※すべての価格は税別表記です。別途消費税がかかります。"}</p>
            </section>

            <section class="detail-cta">
                <FadeIn>
                    <h2>{"まずは無料相談から"}</h2>
                    <p>{"現状のアカウントや課題を拝見した上で、最適なフェーズをご提案します。"}</p>
                    <button class="contact-cta" onclick={to_contact}>
                        {"無料相談を予約する"}
                        <MoveUpRightIcon class="link-icon" />
                    </button>
                </FadeIn>
            </section>
        </div>
    }
}
