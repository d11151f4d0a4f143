//! ブラウザ（URL・localStorage・スクロール）とのやり取り
//!
//! 失敗しても画面は動き続けるため、値がなければ None / 何もしない。

use cartas_common::url_state::clear_location;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// 現在のクエリ文字列（`?` 付き、なければ空）
pub fn location_search() -> String {
    window().location().search().unwrap_or_default()
}

/// ページ遷移せずにURLからクエリを外す
pub fn clear_query() {
    let location = window().location();
    let path = location.pathname().unwrap_or_default();
    if let Ok(history) = window().history() {
        let result = history.replace_state_with_url(&JsValue::NULL, "", Some(clear_location(&path)));
        if let Err(e) = result {
            gloo::console::warn!("URLを更新できません", e);
        }
    }
}

pub fn navigate(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        gloo::console::warn!("ページ移動に失敗", e);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// モーダル表示中は背景をスクロールさせない
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

pub fn scroll_y() -> f64 {
    window().page_y_offset().unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
