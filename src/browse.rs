//! 端末での閲覧（list / view / options）
//!
//! サイトと同じ `Gallery` を使い、URLクエリと同じ書式で条件を受け取る。

use crate::cli::FilterArgs;
use crate::error::{CartasError, Result};
use cartas_common::{
    parse_query, shareable_url, to_query, CardSummary, Gallery, Intent, LetterDetail, LetterRecord, SortMode,
    Update, VolumeFilter, EMPTY_MESSAGE, LOAD_MORE_LABEL,
};
use dialoguer::Select;

/// 引数から絞り込み済みのギャラリーを作る
///
/// `--query` で初期化してから個別の引数を上書きする。
pub fn build_gallery(
    catalog: Vec<LetterRecord>,
    args: &FilterArgs,
    page_size: usize,
    default_sort: SortMode,
) -> Gallery {
    let seed = args.query.as_deref().map(parse_query).unwrap_or_default();
    let mut gallery = Gallery::with_seed(catalog, seed).with_page_size(page_size);

    for intent in filter_intents(args, default_sort) {
        gallery.dispatch(intent);
    }
    gallery
}

/// 引数を操作列に変換
fn filter_intents(args: &FilterArgs, default_sort: SortMode) -> Vec<Intent> {
    let mut intents = Vec::new();

    if let Some(volume) = &args.volume {
        intents.push(Intent::SetVolume(VolumeFilter::from_value(volume)));
    }
    if args.year_start.is_some() {
        intents.push(Intent::SetYearStart(args.year_start));
    }
    if args.year_end.is_some() {
        intents.push(Intent::SetYearEnd(args.year_end));
    }
    for subject in &args.subjects {
        intents.push(Intent::ToggleSubject { subject: subject.clone(), checked: true });
    }
    if let Some(search) = &args.search {
        intents.push(Intent::Search(search.clone()));
    }

    let sort = args.sort.unwrap_or(default_sort);
    if sort != SortMode::default() {
        intents.push(Intent::SetSort(sort));
    }

    intents
}

/// カード1行
pub fn format_card(card: &CardSummary) -> String {
    let mut line = format!(
        "[{:>3}] {:<18} {:<7} {:>4}  {}",
        card.index, card.id, card.volume_badge, card.year, card.page_label
    );
    if !card.subjects.is_empty() {
        line.push_str(&format!("  ({})", card.subjects.join(", ")));
    }
    line
}

/// list の出力行（カウンタ・カード・続き・共有リンク）
///
/// `site_url` が空ならクエリ部分だけを出す。
pub fn list_lines(gallery: &Gallery, site_url: &str) -> Vec<String> {
    let plan = gallery.render_plan();
    let mut lines = vec![plan.counter_text()];

    if plan.empty {
        lines.push(EMPTY_MESSAGE.to_string());
    } else {
        lines.extend(gallery.cards(plan.range.clone()).iter().map(format_card));
    }

    if plan.load_more_visible {
        lines.push(format!("… {} (--pages {})", LOAD_MORE_LABEL, gallery.page_index() + 2));
    }

    if !to_query(gallery.filters()).is_empty() {
        lines.push(shareable_url(site_url, gallery.filters()));
    }

    lines
}

/// 一覧表示
pub fn run_list(mut gallery: Gallery, pages: usize, site_url: &str) {
    for _ in 1..pages.max(1) {
        if gallery.dispatch(Intent::LoadMore) == Update::None {
            break;
        }
    }

    for line in list_lines(&gallery, site_url) {
        println!("{}", line);
    }
}

/// 詳細表示の行
pub fn detail_lines(detail: &LetterDetail) -> Vec<String> {
    vec![
        format!("🖼  {}", detail.image_url),
        format!("{} · Página {} · Ano: {}", detail.volume, detail.page, detail.year),
        format!("Data de publicação: {}", detail.publication_date),
        format!("Assuntos: {}", detail.subjects.join(", ")),
        String::new(),
        detail.text.clone(),
    ]
}

/// モーダルの操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Prev,
    Next,
    Close,
}

impl ViewAction {
    pub fn label(&self) -> &'static str {
        match self {
            ViewAction::Prev => "← Anterior",
            ViewAction::Next => "Próxima →",
            ViewAction::Close => "Fechar",
        }
    }
}

/// 選べる操作（端では前/次を出さない）
pub fn available_actions(detail: &LetterDetail) -> Vec<ViewAction> {
    let mut actions = Vec::new();
    if !detail.prev_disabled {
        actions.push(ViewAction::Prev);
    }
    if !detail.next_disabled {
        actions.push(ViewAction::Next);
    }
    actions.push(ViewAction::Close);
    actions
}

/// 手紙を開いて対話的に移動
pub fn run_view(mut gallery: Gallery, index: usize) -> Result<()> {
    if gallery.dispatch(Intent::OpenLetter(index)) == Update::None {
        return Err(CartasError::LetterNotFound(format!(
            "#{} ({}件中)",
            index,
            gallery.len()
        )));
    }

    while let Some(detail) = gallery.detail() {
        let position = gallery.modal().index().unwrap_or(index);
        println!("\n[{}/{}]", position + 1, gallery.len());
        for line in detail_lines(&detail) {
            println!("{}", line);
        }

        let actions = available_actions(&detail);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| CartasError::Prompt(e.to_string()))?;

        let intent = match choice.map(|i| actions[i]) {
            Some(ViewAction::Prev) => Intent::PrevLetter,
            Some(ViewAction::Next) => Intent::NextLetter,
            Some(ViewAction::Close) | None => Intent::CloseModal,
        };
        gallery.dispatch(intent);
    }

    Ok(())
}

/// フィルタの選択肢
pub fn options_lines(gallery: &Gallery) -> Vec<String> {
    let options = gallery.options();
    let mut lines = Vec::new();

    match options.year_bounds() {
        Some((min, max)) => lines.push(format!("Anos: {} – {}", min, max)),
        None => lines.push("Anos: -".to_string()),
    }
    let volumes: Vec<String> = options.volumes.iter().map(|v| v.to_string()).collect();
    lines.push(format!("Volumes: {}", volumes.join(", ")));
    lines.push(format!("Assuntos ({}):", options.subjects.len()));
    lines.extend(options.subjects.iter().map(|s| format!("  - {}", s)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartas_common::Modal;

    fn catalog() -> Vec<LetterRecord> {
        (1..=30)
            .map(|p| LetterRecord {
                id: format!("vol{}_p{:03}_img1", if p % 2 == 0 { 2 } else { 1 }, p),
                volume: if p % 2 == 0 { 2 } else { 1 },
                page: p,
                year: Some(1990 + (p as i32 % 5)),
                subjects: vec!["Política".into()],
                ocr_text: Some(if p == 7 { "Sr. Lee escreveu".into() } else { "texto".into() }),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_build_gallery_from_query_and_flags() {
        let args = FilterArgs {
            query: Some("?volume=2".into()),
            ..Default::default()
        };
        let gallery = build_gallery(catalog(), &args, 24, SortMode::Page);
        assert_eq!(gallery.len(), 15);

        let args = FilterArgs {
            query: Some("volume=2".into()),
            volume: Some("todos".into()),
            search: Some("  LEE ".into()),
            ..Default::default()
        };
        let gallery = build_gallery(catalog(), &args, 24, SortMode::Page);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.filters().search_text, "lee");
    }

    #[test]
    fn test_list_lines_first_page() {
        let gallery = build_gallery(catalog(), &FilterArgs::default(), 24, SortMode::Page);
        let lines = list_lines(&gallery, "");
        assert_eq!(lines[0], "Exibindo 24 de 30 cartas");
        assert_eq!(lines.len(), 1 + 24 + 1);
        assert!(lines[25].contains("--pages 2"));
    }

    #[test]
    fn test_list_lines_empty_with_query() {
        let args = FilterArgs { search: Some("inexistente".into()), ..Default::default() };
        let gallery = build_gallery(catalog(), &args, 24, SortMode::Page);
        let lines = list_lines(&gallery, "");
        assert_eq!(lines[0], "Exibindo 0 de 0 cartas");
        assert_eq!(lines[1], EMPTY_MESSAGE);
        assert_eq!(lines[2], "?busca=inexistente");
    }

    #[test]
    fn test_list_lines_share_link() {
        let args = FilterArgs { volume: Some("2".into()), ..Default::default() };
        let gallery = build_gallery(catalog(), &args, 24, SortMode::Page);
        let lines = list_lines(&gallery, "https://example.org/cartas.html?busca=x#topo");
        assert_eq!(lines.last().unwrap(), "https://example.org/cartas.html?volume=2");

        let gallery = build_gallery(catalog(), &FilterArgs::default(), 24, SortMode::Page);
        let lines = list_lines(&gallery, "https://example.org/cartas.html");
        assert!(lines.iter().all(|l| !l.contains("example.org")));
    }

    #[test]
    fn test_default_sort_applied() {
        let gallery = build_gallery(catalog(), &FilterArgs::default(), 24, SortMode::YearDesc);
        assert_eq!(gallery.sort(), SortMode::YearDesc);
        let first = gallery.get(0).unwrap();
        assert_eq!(first.year, Some(1994));
    }

    #[test]
    fn test_available_actions_at_edges() {
        let records = catalog();
        let first = LetterDetail::from_record(&records[0], Modal::Open(0), records.len());
        assert_eq!(available_actions(&first), vec![ViewAction::Next, ViewAction::Close]);

        let last = LetterDetail::from_record(&records[29], Modal::Open(29), records.len());
        assert_eq!(available_actions(&last), vec![ViewAction::Prev, ViewAction::Close]);
    }

    #[test]
    fn test_format_card() {
        let card = CardSummary::from_record(&catalog()[0], 0);
        let line = format_card(&card);
        assert!(line.contains("vol1_p001_img1"));
        assert!(line.contains("Vol. 1"));
        assert!(line.contains("Página 1"));
        assert!(line.contains("(Política)"));
    }

    #[test]
    fn test_options_lines() {
        let gallery = Gallery::new(catalog());
        let lines = options_lines(&gallery);
        assert_eq!(lines[0], "Anos: 1990 – 1994");
        assert_eq!(lines[1], "Volumes: 1, 2");
        assert_eq!(lines[2], "Assuntos (1):");
    }
}
