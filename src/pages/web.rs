use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{ArrowLeftIcon, MoveUpRightIcon};
use crate::components::pricing_card::PricingCard;
use crate::controller::ViewController;
use crate::state::{anchor, ScrollTarget, View};

fn subscription_features() -> Vec<String> {
    [
        "オリジナルデザインのHP制作",
        "独自ドメイン・サーバー込み",
        "スマホ最適化・SSL対応",
        "月2回までのテキスト・画像更新",
        "アクセス解析レポート",
        "お問い合わせフォーム設置",
        "チャットサポート",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Properties, PartialEq)]
pub struct WebDetailProps {
    pub controller: ViewController,
}

#[function_component(WebDetail)]
pub fn web_detail(props: &WebDetailProps) -> Html {
    let back_home = props.controller.on_transition(View::Home, ScrollTarget::Top);
    let to_pricing = props.controller.on_navigate(anchor::PRICING);
    let to_contact = props
        .controller
        .on_transition(View::Contact, ScrollTarget::Top);

    html! {
        <div class="detail-view">
            <section id={anchor::WEB_DETAIL_START} class="detail-intro">
                <FadeIn>
                    <button class="back-link" onclick={back_home}>
                        <ArrowLeftIcon class="back-icon" />
                        {"ホームに戻る"}
                    </button>
                    <span class="detail-tag">{"Web Subscription"}</span>
                    <h1>{"サブスク型ホームページ"}</h1>
                    <p class="detail-lead">
                        {"制作費数十万円を一括で払って、そのまま放置されるホームページは資産ではありません。"}
                        {"TRANZIAのサブスク型HPは初期費用を抑え、公開後も更新・改善を続ける月額制。"}
                        {"「作って終わり」にしない、育てるホームページです。"}
                    </p>
                    <button class="jump-link" onclick={to_pricing}>
                        {"料金プランを見る"}
                    </button>
                </FadeIn>

                <div class="detail-points">
                    <FadeIn delay_ms={0}>
                        <div class="point-card">
                            <h3>{"初期費用を最小限に"}</h3>
                            <p>
                                {"大きな制作費は不要。月額の中に制作・ドメイン・サーバー・保守を"}
                                {"すべて含み、立ち上げのハードルを下げます。"}
                            </p>
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={100}>
                        <div class="point-card">
                            <h3>{"更新が止まらない"}</h3>
                            <p>
                                {"営業時間の変更、新メニュー、採用情報——"}
                                {"更新依頼はチャットで送るだけ。常に「動いている」HPを保ちます。"}
                            </p>
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={200}>
                        <div class="point-card">
                            <h3>{"SNSと連動する導線"}</h3>
                            <p>
                                {"SNSで興味を持った見込み客を受け止める着地点として設計。"}
                                {"運用代行との併用で集客導線が一本につながります。"}
                            </p>
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section id={anchor::PRICING} class="pricing-section">
                <FadeIn>
                    <div class="pricing-head">
                        <h2>{"Plans"}</h2>
                        <p>{"規模と更新頻度に合わせて選べる3つの月額プラン。"}</p>
                    </div>
                </FadeIn>

                <div class="pricing-grid">
                    <FadeIn delay_ms={0} class="grid-cell">
                        <PricingCard
                            tier="Light"
                            level_jp="まず持つ・名刺代わり"
                            title="Light"
                            price="9,800"
                            period="最低6ヶ月"
                            description="1〜3ページ構成のシンプルなサイト。まずは「検索して出てくる」状態を作るフェーズ。"
                            features={subscription_features()}
                        />
                    </FadeIn>
                    <FadeIn delay_ms={200} class="grid-cell">
                        <PricingCard
                            tier="Standard"
                            level_jp="集客・採用の受け皿"
                            title="Standard"
                            price="19,800"
                            period="最低6ヶ月"
                            description="最も選ばれる本命プラン。実績・採用・ブログを備えた5〜10ページ構成で、SNSからの流入を確実に受け止めます。"
                            highlight={true}
                            features={subscription_features()}
                        />
                    </FadeIn>
                    <FadeIn delay_ms={400} class="grid-cell">
                        <PricingCard
                            tier="Commerce"
                            level_jp="販売・予約まで一気通貫"
                            title="Commerce"
                            price="39,800"
                            period="最低12ヶ月"
                            description="オンライン決済・予約システムを組み込んだ拡張プラン。サイト上で売上が立つところまで伴走します。"
                            features={subscription_features()}
                        />
                    </FadeIn>
                </div>
                <p class="tax-note">{"※すべての価格は税別表記です。別途消費税がかかります。"}</p>
            </section>

            <section class="detail-cta">
                <FadeIn>
                    <h2>{"まずは無料相談から"}</h2>
                    <p>{"現在のホームページの有無に関わらず、最適な構成をご提案します。"}</p>
                    <button class="contact-cta" onclick={to_contact}>
                        {"無料相談を予約する"}
                        <MoveUpRightIcon class="link-icon" />
                    </button>
                </FadeIn>
            </section>
        </div>
    }
}
