//! 言語選択ドロップダウン

use crate::browser;
use cartas_common::language::{choose_language, STORAGE_KEY};
use cartas_common::{Language, LanguageChoice, LanguageNotice};
use leptos::prelude::*;

/// 言語ごとの移動先ページ（None はその場で切り替え）
const LANGUAGE_PAGES: [(Language, Option<&str>); 3] = [
    (Language::Pt, None),
    (Language::En, None),
    (Language::Es, None),
];

#[component]
pub fn LanguageSelector<FN>(on_notice: FN) -> impl IntoView
where
    FN: Fn(LanguageNotice) + 'static + Clone + Send + Sync,
{
    let saved = Language::from_storage(browser::storage_get(STORAGE_KEY).as_deref());
    let (current, set_current) = signal(saved);
    let (open, set_open) = signal(false);

    let _click = window_event_listener(leptos::ev::click, move |_| set_open.set(false));
    let _key = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_open.set(false);
        }
    });

    let select = move |language: Language, url: Option<&'static str>| {
        browser::storage_set(STORAGE_KEY, language.as_str());
        match choose_language(language, url) {
            LanguageChoice::Navigate(url) => browser::navigate(&url),
            LanguageChoice::Notify(notice) => {
                set_current.set(language);
                set_open.set(false);
                on_notice(notice);
            }
        }
    };

    view! {
        <div
            id="language-selector"
            class="language-selector"
            class:open=move || open.get()
            on:click=|ev| ev.stop_propagation()
        >
            <button
                class="language-selector-btn"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="lang-flag">{move || current.get().flag()}</span>
                <span class="lang-code">{move || current.get().code()}</span>
            </button>
            <div class="language-options">
                {LANGUAGE_PAGES
                    .into_iter()
                    .map(|(language, url)| {
                        let select = select.clone();
                        view! {
                            <button
                                class="language-option"
                                class:active=move || current.get() == language
                                data-lang=language.as_str()
                                on:click=move |_| select(language, url)
                            >
                                <span class="lang-flag">{language.flag()}</span>
                                <span class="lang-name">{language.name()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
