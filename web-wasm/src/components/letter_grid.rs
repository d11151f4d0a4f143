//! 手紙カードの一覧（件数・もっと見る・結果なし表示）

use cartas_common::{CardSummary, RenderPlan, EMPTY_MESSAGE, LOAD_MORE_LABEL};
use leptos::prelude::*;

#[component]
pub fn LetterGrid<FO, FL>(
    cards: ReadSignal<Vec<CardSummary>>,
    plan: Memo<RenderPlan>,
    loading: ReadSignal<bool>,
    load_error: ReadSignal<Option<String>>,
    on_open: FO,
    on_load_more: FL,
) -> impl IntoView
where
    FO: Fn(usize) + 'static + Clone + Send + Sync,
    FL: Fn(()) + 'static + Clone + Send + Sync,
{
    let ready = move || !loading.get() && load_error.get().is_none();

    view! {
        <section id="cartas" class="cartas-resultados">
            <p id="resultados-count" class="resultados-count">
                "Exibindo " <strong>{move || plan.get().shown}</strong>
                " de " <strong>{move || plan.get().total}</strong> " cartas"
            </p>

            <Show when=move || loading.get() || load_error.get().is_some()>
                <div id="loading" class="loading">
                    {move || match load_error.get() {
                        Some(message) => view! { <p>{message}</p> }.into_any(),
                        None => view! { <div class="spinner"></div><p>"Carregando cartas..."</p> }.into_any(),
                    }}
                </div>
            </Show>

            <Show when=move || ready() && plan.get().empty>
                <div id="estado-vazio" class="estado-vazio">
                    <p>{EMPTY_MESSAGE}</p>
                </div>
            </Show>

            <Show when=move || ready() && !plan.get().empty>
                <div id="cartas-grid" class="cartas-grid">
                    <For
                        each=move || cards.get()
                        key=|card| (card.index, card.id.clone())
                        children={
                            let on_open = on_open.clone();
                            move |card| {
                                let on_open = on_open.clone();
                                view! { <LetterCard card=card on_open=on_open /> }
                            }
                        }
                    />
                </div>
            </Show>

            <Show when=move || ready() && plan.get().load_more_visible>
                <div class="carregar-mais">
                    <button
                        id="btn-carregar"
                        class="btn btn-primary"
                        on:click={
                            let on_load_more = on_load_more.clone();
                            move |_| on_load_more(())
                        }
                    >
                        {LOAD_MORE_LABEL}
                    </button>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn LetterCard<FO>(card: CardSummary, on_open: FO) -> impl IntoView
where
    FO: Fn(usize) + 'static + Clone + Send + Sync,
{
    let index = card.index;
    let volume_class = card.volume_class();

    view! {
        <article class="carta-card" data-indice=index on:click=move |_| on_open(index)>
            <div class="carta-thumb">
                <img src=card.image_url alt=card.image_alt loading="lazy" />
                <div class="carta-overlay">
                    <span class=volume_class>{card.volume_badge}</span>
                    <span class="carta-ano">{card.year}</span>
                </div>
            </div>
            <div class="carta-info">
                <p class="carta-pagina">{card.page_label}</p>
                <div class="carta-assuntos">
                    {card
                        .subjects
                        .into_iter()
                        .map(|subject| view! { <span class="carta-assunto">{subject}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
