use yew::prelude::*;

use crate::components::icons::{ArrowLeftIcon, SendIcon};
use crate::config;
use crate::controller::ViewController;
use crate::state::{ScrollTarget, View};

/// Controlled form state. Field order here is the display order; validation
/// reports the first gap in that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub company: String,
    pub name: String,
    pub furigana: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// First required field that is empty after trimming, if any. All six
    /// fields are required; whitespace does not count as filled.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("company", &self.company),
            ("name", &self.name),
            ("furigana", &self.furigana),
            ("phone", &self.phone),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub controller: ViewController,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let fields = use_state(ContactFields::default);
    let back_home = props.controller.on_transition(View::Home, ScrollTarget::Top);

    let edit = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        })
    };
    let on_company = edit(|f, v| f.company = v);
    let on_name = edit(|f, v| f.name = v);
    let on_furigana = edit(|f, v| f.furigana = v);
    let on_phone = edit(|f, v| f.phone = v);
    let on_email = edit(|f, v| f.email = v);
    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_unchecked_into::<web_sys::HtmlTextAreaElement>()
                .value();
            let mut next = (*fields).clone();
            next.message = value;
            fields.set(next);
        })
    };

    // The browser posts the form natively; this handler only ever blocks the
    // submission, it never sends anything itself.
    let onsubmit = {
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            let endpoint = config::get_form_endpoint();
            if endpoint.is_empty() {
                e.prevent_default();
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(
                        "【エラー】送信先フォームのURLが設定されていません。\
                         config.rs の get_form_endpoint にURLを設定してください。",
                    );
                }
                return;
            }
            if let Some(field) = fields.first_missing_field() {
                // the `required` attributes normally catch this before us
                e.prevent_default();
                gloo_console::log!("contact form blocked, empty field:", field);
            }
        })
    };

    html! {
        <div class="contact-view">
            <style>
                {r#"
                .contact-view {
                    min-height: 100vh;
                    padding: 6rem 1.5rem 3rem;
                }
                .contact-view .contact-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .contact-view .contact-head {
                    border-bottom: 1px solid #262626;
                    padding-bottom: 2rem;
                    margin-bottom: 2.5rem;
                }
                .contact-view .contact-head h2 {
                    font-size: 2.5rem;
                    letter-spacing: -0.03em;
                    margin-bottom: 1rem;
                }
                .contact-view .contact-head p { color: #a3a3a3; line-height: 1.9; }
                .contact-view form { display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-view .field-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-view .field { display: flex; flex-direction: column; gap: 0.5rem; }
                .contact-view label { font-size: 0.9rem; font-weight: 700; color: #d4d4d4; }
                .contact-view label .req { color: #3b82f6; }
                .contact-view input,
                .contact-view textarea {
                    background: #171717;
                    border: 1px solid #262626;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    color: #fff;
                    font-size: 1rem;
                    transition: border-color 0.3s;
                }
                .contact-view input::placeholder,
                .contact-view textarea::placeholder { color: #525252; }
                .contact-view input:focus,
                .contact-view textarea:focus {
                    outline: none;
                    border-color: #2563eb;
                }
                .contact-view .submit-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #2563eb;
                    color: #fff;
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    font-weight: 700;
                    font-size: 1rem;
                    padding: 1.2rem;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: background 0.3s, transform 0.3s;
                }
                .contact-view .submit-button:hover { background: #3b82f6; transform: scale(1.01); }
                .contact-view .send-icon { width: 1rem; height: 1rem; }
                @media (max-width: 768px) {
                    .contact-view .field-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <div class="contact-inner">
                <button class="back-link" onclick={back_home}>
                    <ArrowLeftIcon class="back-icon" />
                    {"ホームに戻る"}
                </button>

                <div class="contact-head">
                    <h2>{"Contact Us"}</h2>
                    <p>
                        {"以下のフォームに必要事項をご入力ください。"}<br />
                        {"ご入力いただいた内容は、直接担当者へ送信されます。"}
                    </p>
                </div>

                <form action={config::get_form_endpoint()} method="POST" {onsubmit}>
                    <div class="field-row">
                        <div class="field">
                            <label for="company">{"会社名・組織名 "}<span class="req">{"*"}</span></label>
                            <input
                                id="company"
                                name="company"
                                type="text"
                                required=true
                                placeholder="株式会社TRANZIA"
                                value={fields.company.clone()}
                                oninput={on_company}
                            />
                        </div>
                        <div class="field">
                            <label for="name">{"お名前 "}<span class="req">{"*"}</span></label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required=true
                                placeholder="山田 太郎"
                                value={fields.name.clone()}
                                oninput={on_name}
                            />
                        </div>
                    </div>

                    <div class="field-row">
                        <div class="field">
                            <label for="furigana">{"フリガナ "}<span class="req">{"*"}</span></label>
                            <input
                                id="furigana"
                                name="furigana"
                                type="text"
                                required=true
                                placeholder="ヤマダ タロウ"
                                value={fields.furigana.clone()}
                                oninput={on_furigana}
                            />
                        </div>
                        <div class="field">
                            <label for="phone">{"電話番号 "}<span class="req">{"*"}</span></label>
                            <input
                                id="phone"
                                name="phone"
                                type="tel"
                                required=true
                                placeholder="03-1234-5678"
                                value={fields.phone.clone()}
                                oninput={on_phone}
                            />
                        </div>
                    </div>

                    <div class="field">
                        <label for="email">{"メールアドレス "}<span class="req">{"*"}</span></label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required=true
                            placeholder="example@tranzia.jp"
                            value={fields.email.clone()}
                            oninput={on_email}
                        />
                    </div>

                    <div class="field">
                        <label for="message">{"ご相談内容 "}<span class="req">{"*"}</span></label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            required=true
                            placeholder="SNS運用の料金プランについて詳しく聞きたい..."
                            value={fields.message.clone()}
                            oninput={on_message}
                        />
                    </div>

                    <button type="submit" class="submit-button">
                        {"送信する"}
                        <SendIcon class="send-icon" />
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::ContactFields;

    fn filled() -> ContactFields {
        ContactFields {
            company: "株式会社テスト".into(),
            name: "山田 太郎".into(),
            furigana: "ヤマダ タロウ".into(),
            phone: "098-123-4567".into(),
            email: "taro@example.jp".into(),
            message: "料金について".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled().first_missing_field(), None);
    }

    #[test]
    fn empty_company_blocks_submission() {
        let mut fields = filled();
        fields.company.clear();
        assert_eq!(fields.first_missing_field(), Some("company"));
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let mut fields = filled();
        fields.message = "   ".into();
        assert_eq!(fields.first_missing_field(), Some("message"));
    }

    #[test]
    fn reports_first_gap_in_display_order() {
        let mut fields = filled();
        fields.name.clear();
        fields.email.clear();
        assert_eq!(fields.first_missing_field(), Some("name"));
    }
}
