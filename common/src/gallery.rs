//! ギャラリーの状態管理
//!
//! UIイベントを `Intent` に変換して `Gallery::dispatch` に渡し、
//! 返ってきた `Update` に従って1か所で再描画する。
//! フィルタ・並び替えは純粋関数（filter/sort）に委譲する。

use crate::card::{CardSummary, LetterDetail};
use crate::catalog::FilterOptions;
use crate::filter::{filter_indices, FilterState, VolumeFilter};
use crate::modal::{Modal, ModalKey};
use crate::pagination::{shown_count, RenderPlan, PAGE_SIZE};
use crate::sort::{sort_indices, SortMode};
use crate::types::LetterRecord;
use crate::url_state::UrlSeed;

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetVolume(VolumeFilter),
    SetYearStart(Option<i32>),
    SetYearEnd(Option<i32>),
    /// 件名チェックボックスの切り替え
    ToggleSubject { subject: String, checked: bool },
    /// 検索欄の入力（確定時）
    Search(String),
    SetSort(SortMode),
    LoadMore,
    ClearFilters,
    OpenLetter(usize),
    PrevLetter,
    NextLetter,
    CloseModal,
    Key(ModalKey),
}

/// dispatch の結果、描画側で行うこと
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// 変化なし
    None,
    /// 一覧を描画（clear なら作り直し、そうでなければ追加）
    Render(RenderPlan),
    /// 一覧を作り直し、URLのクエリを外す
    Reset(RenderPlan),
    /// モーダルの表示内容が変わった
    Modal,
}

/// アプリケーション状態
#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Vec<LetterRecord>,
    options: FilterOptions,
    filters: FilterState,
    sort: SortMode,
    /// 絞り込み・並び替え後のカタログインデックス
    view: Vec<usize>,
    /// 表示済みページ数 - 1
    page_index: usize,
    page_size: usize,
    modal: Modal,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Gallery {
    pub fn new(catalog: Vec<LetterRecord>) -> Self {
        Self::with_seed(catalog, UrlSeed::default())
    }

    /// URLクエリ由来の初期状態で作成
    pub fn with_seed(catalog: Vec<LetterRecord>, seed: UrlSeed) -> Self {
        let options = FilterOptions::from_records(&catalog);
        let mut gallery = Self {
            catalog,
            options,
            filters: seed.filters,
            sort: SortMode::default(),
            view: Vec::new(),
            page_index: 0,
            page_size: PAGE_SIZE,
            modal: Modal::Closed,
        };
        gallery.recompute();
        gallery
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn catalog(&self) -> &[LetterRecord] {
        &self.catalog
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 絞り込み結果の件数
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// 絞り込み結果の位置 `index` のレコード
    pub fn get(&self, index: usize) -> Option<&LetterRecord> {
        self.view.get(index).map(|&i| &self.catalog[i])
    }

    /// 絞り込み結果（並び替え済み）
    pub fn view(&self) -> impl Iterator<Item = &LetterRecord> + '_ {
        self.view.iter().map(move |&i| &self.catalog[i])
    }

    /// 表示済みのカード
    pub fn visible_cards(&self) -> Vec<CardSummary> {
        self.cards(0..self.shown())
    }

    /// 範囲内のカード
    pub fn cards(&self, range: std::ops::Range<usize>) -> Vec<CardSummary> {
        let end = range.end.min(self.view.len());
        let start = range.start.min(end);
        self.view[start..end]
            .iter()
            .enumerate()
            .map(|(offset, &i)| CardSummary::from_record(&self.catalog[i], start + offset))
            .collect()
    }

    pub fn shown(&self) -> usize {
        shown_count(self.view.len(), self.page_index, self.page_size)
    }

    /// 現在の描画内容（1ページ目から作り直す前提）
    pub fn render_plan(&self) -> RenderPlan {
        let mut plan = RenderPlan::first_page(self.view.len(), self.page_size);
        plan.range = 0..self.shown();
        plan.shown = self.shown();
        plan.load_more_visible = self.shown() < self.view.len();
        plan
    }

    /// 開いているレコードの詳細
    pub fn detail(&self) -> Option<LetterDetail> {
        let record = self.get(self.modal.index()?)?;
        Some(LetterDetail::from_record(record, self.modal, self.view.len()))
    }

    pub fn dispatch(&mut self, intent: Intent) -> Update {
        match intent {
            Intent::SetVolume(volume) => {
                self.filters.volume = volume;
                self.refilter()
            }
            Intent::SetYearStart(year) => {
                self.filters.year_start = year;
                self.refilter()
            }
            Intent::SetYearEnd(year) => {
                self.filters.year_end = year;
                self.refilter()
            }
            Intent::ToggleSubject { subject, checked } => {
                if checked {
                    self.filters.subjects.insert(subject);
                } else {
                    self.filters.subjects.remove(&subject);
                }
                self.refilter()
            }
            Intent::Search(input) => {
                self.filters.search_text = FilterState::normalize_search(&input);
                self.refilter()
            }
            Intent::SetSort(mode) => {
                self.sort = mode;
                self.refilter()
            }
            Intent::LoadMore => {
                if self.shown() >= self.view.len() {
                    return Update::None;
                }
                self.page_index += 1;
                Update::Render(RenderPlan::next_page(self.view.len(), self.page_index, self.page_size))
            }
            Intent::ClearFilters => {
                self.filters = FilterState::default();
                match self.refilter() {
                    Update::Render(plan) => Update::Reset(plan),
                    other => other,
                }
            }
            Intent::OpenLetter(index) => {
                if self.modal.open(index, self.view.len()) {
                    Update::Modal
                } else {
                    Update::None
                }
            }
            Intent::PrevLetter => self.modal_update(|m, _| m.prev()),
            Intent::NextLetter => self.modal_update(|m, len| m.next(len)),
            Intent::CloseModal => self.modal_update(|m, _| {
                let was_open = m.is_open();
                m.close();
                was_open
            }),
            Intent::Key(key) => {
                if !self.modal.is_open() {
                    return Update::None;
                }
                match key {
                    ModalKey::Escape => self.dispatch(Intent::CloseModal),
                    ModalKey::ArrowLeft => self.dispatch(Intent::PrevLetter),
                    ModalKey::ArrowRight => self.dispatch(Intent::NextLetter),
                }
            }
        }
    }

    fn modal_update(&mut self, f: impl FnOnce(&mut Modal, usize) -> bool) -> Update {
        if f(&mut self.modal, self.view.len()) {
            Update::Modal
        } else {
            Update::None
        }
    }

    /// 絞り込み→並び替え→1ページ目へ
    fn refilter(&mut self) -> Update {
        self.recompute();
        Update::Render(RenderPlan::first_page(self.view.len(), self.page_size))
    }

    fn recompute(&mut self) {
        let mut view = filter_indices(&self.catalog, &self.filters);
        sort_indices(&self.catalog, &mut view, self.sort);
        self.view = view;
        self.page_index = 0;
        // 位置が指すレコードが変わるため閉じる
        self.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_state::parse_query;

    /// 30件: 巻1と巻2、1961〜1963年
    fn catalog() -> Vec<LetterRecord> {
        (0..30)
            .map(|i| {
                let volume = if i < 18 { 1 } else { 2 };
                LetterRecord {
                    id: format!("c{:02}", i),
                    image_url: format!("assets/cartas/vol{}/c{:02}.jpg", volume, i),
                    volume,
                    page: (i as u32 % 18) + 1,
                    year: Some(1961 + (i as i32 % 3)),
                    subjects: if i % 2 == 0 { vec!["Brasil".into()] } else { vec!["Política".into()] },
                    ocr_text: if i % 10 == 0 { Some(format!("Caro Lee, carta {}", i)) } else { None },
                    ..Default::default()
                }
            })
            .collect()
    }

    fn ids(gallery: &Gallery) -> Vec<String> {
        gallery.view().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_initial_view_is_full_catalog() {
        let gallery = Gallery::new(catalog());
        assert_eq!(gallery.len(), 30);
        let plan = gallery.render_plan();
        assert_eq!(plan.shown, 24);
        assert!(plan.load_more_visible);
        assert_eq!(gallery.options().years, vec![1961, 1962, 1963]);
    }

    #[test]
    fn test_volume_scenario() {
        let mut gallery = Gallery::new(catalog());
        let update = gallery.dispatch(Intent::SetVolume(VolumeFilter::Volume(2)));
        assert!(gallery.view().all(|r| r.volume == 2));
        assert_eq!(gallery.len(), 12);
        match update {
            Update::Render(plan) => {
                assert!(plan.clear);
                assert_eq!(plan.shown, 12.min(24));
                assert_eq!(plan.counter_text(), "Exibindo 12 de 12 cartas");
            }
            other => panic!("unexpected update: {:?}", other),
        }

        gallery.dispatch(Intent::SetSort(SortMode::YearDesc));
        let years: Vec<i32> = gallery.view().map(|r| r.year.unwrap_or(0)).collect();
        assert!(years.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_load_more_and_reset_on_change() {
        let mut gallery = Gallery::new(catalog());
        match gallery.dispatch(Intent::LoadMore) {
            Update::Render(plan) => {
                assert!(!plan.clear);
                assert_eq!(plan.range, 24..30);
                assert!(!plan.load_more_visible);
            }
            other => panic!("unexpected update: {:?}", other),
        }
        assert_eq!(gallery.page_index(), 1);
        assert_eq!(gallery.dispatch(Intent::LoadMore), Update::None);

        gallery.dispatch(Intent::SetSort(SortMode::YearAsc));
        assert_eq!(gallery.page_index(), 0);

        gallery.dispatch(Intent::LoadMore);
        gallery.dispatch(Intent::SetYearStart(Some(1962)));
        assert_eq!(gallery.page_index(), 0);
    }

    #[test]
    fn test_idempotent_view() {
        let mut gallery = Gallery::new(catalog());
        gallery.dispatch(Intent::SetSort(SortMode::YearDesc));
        let first = ids(&gallery);
        gallery.dispatch(Intent::SetSort(SortMode::YearDesc));
        assert_eq!(ids(&gallery), first);
    }

    #[test]
    fn test_search_seed() {
        let gallery = Gallery::with_seed(catalog(), parse_query("busca=lee"));
        assert_eq!(gallery.filters().search_text, "lee");
        assert_eq!(ids(&gallery), vec!["c00", "c10", "c20"]);
    }

    #[test]
    fn test_subject_toggle() {
        let mut gallery = Gallery::new(catalog());
        gallery.dispatch(Intent::ToggleSubject { subject: "Brasil".into(), checked: true });
        assert_eq!(gallery.len(), 15);
        gallery.dispatch(Intent::ToggleSubject { subject: "Política".into(), checked: true });
        assert_eq!(gallery.len(), 30);
        gallery.dispatch(Intent::ToggleSubject { subject: "Brasil".into(), checked: false });
        assert_eq!(gallery.len(), 15);
    }

    #[test]
    fn test_clear_filters_restores_catalog() {
        let mut gallery = Gallery::with_seed(catalog(), parse_query("volume=2&ano=1962"));
        assert!(gallery.len() < 30);
        let update = gallery.dispatch(Intent::ClearFilters);
        assert!(matches!(update, Update::Reset(ref plan) if plan.total == 30));
        assert_eq!(gallery.len(), 30);
        assert!(gallery.filters().is_default());
    }

    #[test]
    fn test_modal_navigation_bounds() {
        let mut gallery = Gallery::new(catalog());
        assert_eq!(gallery.dispatch(Intent::OpenLetter(30)), Update::None);
        assert!(!gallery.modal().is_open());

        assert_eq!(gallery.dispatch(Intent::OpenLetter(0)), Update::Modal);
        assert!(gallery.detail().unwrap().prev_disabled);
        assert_eq!(gallery.dispatch(Intent::PrevLetter), Update::None);

        gallery.dispatch(Intent::OpenLetter(29));
        assert!(gallery.detail().unwrap().next_disabled);
        assert_eq!(gallery.dispatch(Intent::NextLetter), Update::None);

        assert_eq!(gallery.dispatch(Intent::Key(ModalKey::ArrowLeft)), Update::Modal);
        assert_eq!(gallery.modal(), Modal::Open(28));
        assert_eq!(gallery.dispatch(Intent::Key(ModalKey::Escape)), Update::Modal);
        assert!(gallery.detail().is_none());
        assert_eq!(gallery.dispatch(Intent::Key(ModalKey::Escape)), Update::None);
    }

    #[test]
    fn test_refilter_closes_modal() {
        let mut gallery = Gallery::new(catalog());
        gallery.dispatch(Intent::OpenLetter(5));
        gallery.dispatch(Intent::SetVolume(VolumeFilter::Volume(1)));
        assert_eq!(gallery.modal(), Modal::Closed);
    }

    #[test]
    fn test_visible_cards_follow_pages() {
        let mut gallery = Gallery::new(catalog()).with_page_size(10);
        assert_eq!(gallery.visible_cards().len(), 10);
        gallery.dispatch(Intent::LoadMore);
        let cards = gallery.visible_cards();
        assert_eq!(cards.len(), 20);
        assert_eq!(cards[15].index, 15);
    }

    #[test]
    fn test_empty_catalog() {
        let gallery = Gallery::default();
        let plan = gallery.render_plan();
        assert!(plan.empty);
        assert!(!plan.load_more_visible);
    }
}
