//! 通知トースト

use cartas_common::LanguageNotice;
use leptos::prelude::*;

#[component]
pub fn Toast(notice: ReadSignal<Option<LanguageNotice>>, leaving: ReadSignal<bool>) -> impl IntoView {
    view! {
        {move || {
            notice
                .get()
                .map(|notice| {
                    view! {
                        <div class="lang-notification" class:leaving=move || leaving.get()>
                            <span>{notice.title}</span>
                            <small>{notice.note}</small>
                        </div>
                    }
                })
        }}
    }
}
