//! 手紙の詳細モーダル

use cartas_common::{Intent, LetterDetail};
use leptos::prelude::*;

#[component]
pub fn LetterModal<FI>(detail: Memo<Option<LetterDetail>>, on_intent: FI) -> impl IntoView
where
    FI: Fn(Intent) + 'static + Clone + Send + Sync,
{
    let on_close = {
        let on_intent = on_intent.clone();
        move |_: leptos::ev::MouseEvent| on_intent(Intent::CloseModal)
    };
    let on_close_button = on_close.clone();
    let on_prev = {
        let on_intent = on_intent.clone();
        move |_: leptos::ev::MouseEvent| on_intent(Intent::PrevLetter)
    };
    let on_next = move |_: leptos::ev::MouseEvent| on_intent(Intent::NextLetter);

    let field = move |f: fn(&LetterDetail) -> String| move || detail.with(|d| d.as_ref().map(f).unwrap_or_default());

    view! {
        // 背景クリックで閉じる
        <div id="modal" class="modal" class:active=move || detail.with(Option::is_some) on:click=on_close>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button id="modal-close" class="modal-close" aria-label="Fechar" on:click=on_close_button>
                    "×"
                </button>

                <div class="modal-imagem">
                    <img id="modal-img" src=field(|d| d.image_url.clone()) alt="Carta" />
                </div>

                <div class="modal-detalhes">
                    <p><strong>"Volume: "</strong><span id="modal-volume">{field(|d| d.volume.clone())}</span></p>
                    <p><strong>"Página: "</strong><span id="modal-pagina">{field(|d| d.page.clone())}</span></p>
                    <p><strong>"Ano: "</strong><span id="modal-ano">{field(|d| d.year.clone())}</span></p>
                    <p><strong>"Data: "</strong><span id="modal-data">{field(|d| d.publication_date.clone())}</span></p>
                    <div id="modal-assuntos" class="modal-assuntos">
                        {move || {
                            detail
                                .with(|d| d.as_ref().map(|d| d.subjects.clone()).unwrap_or_default())
                                .into_iter()
                                .map(|subject| view! { <span class="carta-assunto">{subject}</span> })
                                .collect_view()
                        }}
                    </div>
                    <div id="modal-texto" class="modal-texto">{field(|d| d.text.clone())}</div>
                </div>

                <div class="modal-nav">
                    <button
                        id="modal-prev"
                        class="modal-nav-btn"
                        prop:disabled=move || detail.with(|d| d.as_ref().map_or(true, |d| d.prev_disabled))
                        on:click=on_prev
                    >
                        "← Anterior"
                    </button>
                    <button
                        id="modal-next"
                        class="modal-nav-btn"
                        prop:disabled=move || detail.with(|d| d.as_ref().map_or(true, |d| d.next_disabled))
                        on:click=on_next
                    >
                        "Próxima →"
                    </button>
                </div>
            </div>
        </div>
    }
}
