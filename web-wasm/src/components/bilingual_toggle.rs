//! 原文（英語）と訳文（ポルトガル語）の切り替え

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLanguage {
    En,
    Pt,
}

#[component]
pub fn BilingualToggle(en: &'static str, pt: &'static str) -> impl IntoView {
    let (shown, set_shown) = signal(TextLanguage::Pt);

    view! {
        <div class="carta-bilingue">
            <div class="carta-toggle">
                <button
                    class="toggle-btn"
                    class:active=move || shown.get() == TextLanguage::En
                    data-lang="en"
                    on:click=move |_| set_shown.set(TextLanguage::En)
                >
                    "English"
                </button>
                <button
                    class="toggle-btn"
                    class:active=move || shown.get() == TextLanguage::Pt
                    data-lang="pt"
                    on:click=move |_| set_shown.set(TextLanguage::Pt)
                >
                    "Português"
                </button>
            </div>
            <div class="carta-texto" lang="en" style:display=move || if shown.get() == TextLanguage::En { "block" } else { "none" }>
                {en}
            </div>
            <div class="carta-texto" lang="pt" style:display=move || if shown.get() == TextLanguage::Pt { "block" } else { "none" }>
                {pt}
            </div>
        </div>
    }
}
