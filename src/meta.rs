//! Startup side effect: document title plus description/keywords meta tags.
//! Runs once on mount; tags are upserted so a reload never duplicates them.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlMetaElement};

const TITLE: &str = "沖縄のSNS運用代行｜TRANZIA（トランジア）";
const DESCRIPTION: &str = "沖縄の企業向けにSNS運用代行・Instagram動画制作・SNS戦略設計、\
サブスク型ホームページ制作を提供。企画から撮影・編集まで一貫対応し、集客と採用を支援します。";
const KEYWORDS: &str = "沖縄, SNS運用代行, インスタ運用, 動画制作, ホームページ制作, 集客, 採用, TRANZIA";

pub fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(TITLE);
    upsert_meta(&document, "description", DESCRIPTION);
    upsert_meta(&document, "keywords", KEYWORDS);
}

fn upsert_meta(document: &Document, name: &str, content: &str) {
    let existing = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok());

    let meta = match existing {
        Some(meta) => meta,
        None => {
            let Some(meta) = document
                .create_element("meta")
                .ok()
                .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok())
            else {
                return;
            };
            meta.set_name(name);
            if let Some(head) = document.head() {
                let _ = head.append_child(&meta);
            }
            meta
        }
    };
    meta.set_content(content);
}
