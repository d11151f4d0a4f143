//! ヘッダーコンポーネント（ナビゲーション・言語選択）

use crate::chrome::{header_shadow, scroll_to_anchor};
use crate::components::language_selector::LanguageSelector;
use cartas_common::LanguageNotice;
use leptos::prelude::*;

/// ナビゲーションのリンク
const NAV_LINKS: [(&str, &str); 3] = [
    ("#volumes", "Volumes"),
    ("#cartas", "Cartas"),
    ("#carta-destaque", "Em destaque"),
];

#[component]
pub fn Header<FN>(on_notice: FN) -> impl IntoView
where
    FN: Fn(LanguageNotice) + 'static + Clone + Send + Sync,
{
    let (menu_open, set_menu_open) = signal(false);
    let (scroll_y, set_scroll_y) = signal(0.0f64);

    let _scroll = window_event_listener(leptos::ev::scroll, move |_| {
        set_scroll_y.set(crate::browser::scroll_y());
    });
    // メニュー外のクリックで閉じる
    let _click = window_event_listener(leptos::ev::click, move |_| {
        set_menu_open.set(false);
    });

    view! {
        <header class="main-header" style=move || format!("box-shadow: {}", header_shadow(scroll_y.get()))>
            <div class="header-inner">
                <a href="#" class="logo">"Minhas Cartas"</a>

                <button
                    class="nav-toggle"
                    class:active=move || menu_open.get()
                    aria-label="Menu"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_menu_open.update(|open| *open = !*open);
                    }
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class="nav-menu" class:active=move || menu_open.get() on:click=|ev| ev.stop_propagation()>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    on:click=move |ev| {
                                        if scroll_to_anchor(href) {
                                            ev.prevent_default();
                                        }
                                        set_menu_open.set(false);
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <LanguageSelector on_notice=on_notice />
            </div>
        </header>
    }
}
