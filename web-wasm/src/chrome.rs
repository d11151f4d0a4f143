//! ページ共通の演出（アンカーのスムーズスクロール・ヘッダーの影・フェードイン）

use crate::browser;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// 固定ヘッダーの高さ分ずらす
pub const HEADER_OFFSET: f64 = 80.0;
/// これ以上スクロールしたらヘッダーの影を濃くする
pub const SHADOW_SCROLL_THRESHOLD: f64 = 100.0;
pub const FADE_IN_THRESHOLD: f64 = 0.1;
/// フェードインの対象
pub const FADE_IN_SELECTOR: &str = ".volume-card, .timeline-item, .decade-card";

const SHADOW_RAISED: &str = "0 4px 30px rgba(0,0,0,0.12)";
const SHADOW_RESTING: &str = "0 2px 20px rgba(0,0,0,0.08)";

pub fn header_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > SHADOW_SCROLL_THRESHOLD {
        SHADOW_RAISED
    } else {
        SHADOW_RESTING
    }
}

/// ページ内リンクの移動先ID（"#" 単独や外部リンクは None）
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// スクロール先の位置
pub fn scroll_offset(element_top: f64, page_y: f64) -> f64 {
    element_top + page_y - HEADER_OFFSET
}

/// `#id` へスクロール。移動した場合 true（呼び出し側で既定動作を止める）
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    let Some(target) = document().get_element_by_id(id) else {
        return false;
    };
    let top = target.get_bounding_client_rect().top();
    browser::smooth_scroll_to(scroll_offset(top, browser::scroll_y()));
    true
}

/// 対象要素が初めて見えたときにフェードインさせる
pub fn install_fade_in() {
    let Ok(nodes) = document().query_selector_all(FADE_IN_SELECTOR) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("animate-in");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            gloo::console::warn!("IntersectionObserver を作成できません", e);
            return;
        }
    };
    // ページが閉じるまで監視を続ける
    callback.forget();

    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let style = element.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(&element);
    }
}
