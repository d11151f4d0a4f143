//! ページネーション
//!
//! 絞り込み結果を固定件数ずつ表示する。フィルタ/並び替え変更時は
//! 1ページ目から描き直し、「もっと見る」では次の分だけ追加する。

use std::ops::Range;

/// 1ページあたりの件数
pub const PAGE_SIZE: usize = 24;

/// 絞り込み結果が0件のとき
pub const EMPTY_MESSAGE: &str = "Nenhuma carta encontrada com os filtros selecionados.";
/// カタログの取得に失敗したとき
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar cartas. Tente novamente.";
pub const LOAD_MORE_LABEL: &str = "Carregar mais cartas";

/// 1回の描画内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// 既存のカードを消してから描画するか
    pub clear: bool,
    /// 今回追加するカードの範囲（絞り込み結果上の位置）
    pub range: Range<usize>,
    /// 「もっと見る」ボタンを表示するか
    pub load_more_visible: bool,
    /// 結果なし表示にするか（グリッドとボタンは非表示）
    pub empty: bool,
    /// 表示済み件数
    pub shown: usize,
    /// 絞り込み結果の総数
    pub total: usize,
}

impl RenderPlan {
    /// `page_index` ページ目（0始まり）の描画内容
    pub fn for_page(total: usize, page_index: usize, page_size: usize, clear: bool) -> Self {
        let page_size = page_size.max(1);
        let start = page_index.saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);
        let boundary = page_index.saturating_add(1).saturating_mul(page_size);

        Self {
            clear,
            range: start..end,
            load_more_visible: boundary < total,
            empty: total == 0,
            shown: boundary.min(total),
            total,
        }
    }

    /// フィルタ/並び替え変更後の最初の描画
    pub fn first_page(total: usize, page_size: usize) -> Self {
        Self::for_page(total, 0, page_size, true)
    }

    /// 「もっと見る」による追加描画
    pub fn next_page(total: usize, page_index: usize, page_size: usize) -> Self {
        Self::for_page(total, page_index, page_size, false)
    }

    /// 件数表示のテキスト
    pub fn counter_text(&self) -> String {
        counter_text(self.shown, self.total)
    }
}

/// 表示済み件数（`min((page+1)*size, total)`）
pub fn shown_count(total: usize, page_index: usize, page_size: usize) -> usize {
    page_index
        .saturating_add(1)
        .saturating_mul(page_size.max(1))
        .min(total)
}

pub fn counter_text(shown: usize, total: usize) -> String {
    format!("Exibindo {} de {} cartas", shown, total)
}
