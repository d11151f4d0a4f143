//! メインアプリケーションコンポーネント

use crate::api::catalog::fetch_catalog;
use crate::browser;
use crate::chrome;
use crate::components::{
    bilingual_toggle::BilingualToggle,
    filters_sidebar::FiltersSidebar,
    header::Header,
    letter_grid::LetterGrid,
    letter_modal::LetterModal,
    toast::Toast,
};
use cartas_common::classify::year_window;
use cartas_common::language::{NOTIFICATION_EXIT_MS, NOTIFICATION_MS};
use cartas_common::{
    parse_query, CardSummary, Gallery, Intent, LanguageNotice, ModalKey, Update as GalleryUpdate,
    DATA_PATH, LOAD_ERROR_MESSAGE,
};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FEATURED_EN: &str = "The original letter, as it was written.";
const FEATURED_PT: &str = "A carta original, na tradução para o português.";

/// ギャラリーへの操作をまとめたハンドル
#[derive(Clone, Copy)]
struct GalleryHandle {
    gallery: ReadSignal<Gallery>,
    set_gallery: WriteSignal<Gallery>,
    set_cards: WriteSignal<Vec<CardSummary>>,
    set_search_input: WriteSignal<String>,
}

impl GalleryHandle {
    /// 操作を反映し、結果に応じて描画内容を更新
    fn dispatch(&self, intent: Intent) {
        let Some(update) = self.set_gallery.try_update(|g| g.dispatch(intent)) else {
            return;
        };

        let reset = matches!(update, GalleryUpdate::Reset(_));
        match update {
            GalleryUpdate::Render(plan) | GalleryUpdate::Reset(plan) => {
                let cards = self.gallery.with_untracked(|g| g.cards(plan.range.clone()));
                if plan.clear {
                    self.set_cards.set(cards);
                } else {
                    self.set_cards.update(|rendered| rendered.extend(cards));
                }
                if reset {
                    self.set_search_input.set(String::new());
                    browser::clear_query();
                }
            }
            GalleryUpdate::Modal | GalleryUpdate::None => {}
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (gallery, set_gallery) = signal(Gallery::default());
    let (cards, set_cards) = signal(Vec::<CardSummary>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);
    let (search_input, set_search_input) = signal(String::new());
    let (notice, set_notice) = signal(None::<LanguageNotice>);
    let (notice_leaving, set_notice_leaving) = signal(false);
    let (notice_id, set_notice_id) = signal(0u32);

    let handle = GalleryHandle { gallery, set_gallery, set_cards, set_search_input };
    let on_intent = move |intent: Intent| handle.dispatch(intent);

    let options = Memo::new(move |_| gallery.with(|g| g.options().clone()));
    let filters = Memo::new(move |_| gallery.with(|g| g.filters().clone()));
    let sort = Memo::new(move |_| gallery.with(|g| g.sort()));
    let plan = Memo::new(move |_| gallery.with(|g| g.render_plan()));
    let detail = Memo::new(move |_| gallery.with(|g| g.detail()));

    // 起動時にカタログを1回だけ取得
    spawn_local(async move {
        match fetch_catalog(DATA_PATH).await {
            Ok(records) => {
                let seed = parse_query(&browser::location_search());
                set_search_input.set(seed.search_input.clone().unwrap_or_default());
                let loaded = Gallery::with_seed(records, seed);
                set_cards.set(loaded.visible_cards());
                set_gallery.set(loaded);
            }
            Err(e) => {
                gloo::console::error!("Erro ao carregar cartas:", e.to_string());
                set_load_error.set(Some(LOAD_ERROR_MESSAGE.to_string()));
            }
        }
        set_loading.set(false);
    });

    // モーダル表示中は背景スクロールを止める
    Effect::new(move |_| {
        let open = detail.with(Option::is_some);
        browser::set_scroll_locked(open);
    });

    let _keys = window_event_listener(leptos::ev::keydown, move |ev| {
        if let Some(key) = ModalKey::from_key(&ev.key()) {
            handle.dispatch(Intent::Key(key));
        }
    });

    // 新しい通知は前の通知を置き換える
    let on_notice = move |new_notice: LanguageNotice| {
        let id = notice_id.get_untracked().wrapping_add(1);
        set_notice_id.set(id);
        set_notice_leaving.set(false);
        set_notice.set(Some(new_notice));

        Timeout::new(NOTIFICATION_MS, move || {
            if notice_id.get_untracked() != id {
                return;
            }
            set_notice_leaving.set(true);
            Timeout::new(NOTIFICATION_EXIT_MS, move || {
                if notice_id.get_untracked() == id {
                    set_notice.set(None);
                }
            })
            .forget();
        })
        .forget();
    };

    let (vol1_start, vol1_end) = year_window(1);
    let (vol2_start, vol2_end) = year_window(2);

    Effect::new(move |_| chrome::install_fade_in());

    view! {
        <Header on_notice=on_notice />

        <main class="container">
            <section id="volumes" class="volumes">
                <div class="volume-card vol1">
                    <h2>"Volume 1"</h2>
                    <p>{format!("{} – {}", vol1_start, vol1_end)}</p>
                </div>
                <div class="volume-card vol2">
                    <h2>"Volume 2"</h2>
                    <p>{format!("{} – {}", vol2_start, vol2_end)}</p>
                </div>
            </section>

            <div class="cartas-layout">
                <FiltersSidebar
                    options=options
                    filters=filters
                    sort=sort
                    search_input=search_input
                    set_search_input=set_search_input
                    on_intent=on_intent
                />

                <LetterGrid
                    cards=cards
                    plan=plan
                    loading=loading
                    load_error=load_error
                    on_open=move |index| on_intent(Intent::OpenLetter(index))
                    on_load_more=move |_| on_intent(Intent::LoadMore)
                />
            </div>

            <section id="carta-destaque" class="carta-destaque">
                <BilingualToggle en=FEATURED_EN pt=FEATURED_PT />
            </section>
        </main>

        <LetterModal detail=detail on_intent=on_intent />
        <Toast notice=notice leaving=notice_leaving />
    }
}
