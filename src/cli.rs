use cartas_common::{Language, SortMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cartas")]
#[command(about = "手紙アーカイブのカタログ閲覧・保守ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSON（省略時は CARTAS_CATALOG → 設定ファイル）
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

/// 一覧の絞り込み条件（list / view 共通）
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// サイトと同じクエリ文字列（例: "volume=2&busca=lee"）
    #[arg(short, long)]
    pub query: Option<String>,

    /// 巻（"todos" で全巻）
    #[arg(long)]
    pub volume: Option<String>,

    /// 開始年
    #[arg(long)]
    pub year_start: Option<i32>,

    /// 終了年
    #[arg(long)]
    pub year_end: Option<i32>,

    /// 件名（複数指定はOR）
    #[arg(long = "subject")]
    pub subjects: Vec<String>,

    /// 本文検索
    #[arg(short, long)]
    pub search: Option<String>,

    /// 並び順 (pagina/volume/ano-asc/ano-desc)
    #[arg(long)]
    pub sort: Option<SortMode>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 手紙を一覧表示
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// 表示するページ数（「もっと見る」の回数 + 1）
        #[arg(short, long, default_value = "1")]
        pages: usize,
    },

    /// 手紙を開いて前後に移動
    View {
        /// 絞り込み結果上の位置（0始まり）
        #[arg(required = true)]
        index: usize,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// フィルタの選択肢（年の範囲・件名）を表示
    Options,

    /// カタログの統計
    Stats,

    /// OCR本文から件名・年・掲載日を補完
    Classify {
        /// 既存の値も上書き
        #[arg(long)]
        overwrite: bool,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ドライラン（保存しない）
        #[arg(long)]
        dry_run: bool,
    },

    /// OCRの怪しい本文をExcelに書き出し
    OcrReport {
        /// 出力xlsx（省略時は ocr_problems_YYYYMMDD.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// リンク先のURL（省略時は設定値）
        #[arg(long)]
        base_url: Option<String>,
    },

    /// 修正済みのOCRレポートをカタログに反映
    ApplyCorrections {
        /// 修正済みxlsx
        #[arg(required = true)]
        input: PathBuf,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 画像フォルダを走査してカタログに追加
    Scan {
        /// 画像フォルダ（省略時は設定の assets_dir）
        folder: Option<PathBuf>,

        /// 重複・小さすぎる画像を削除
        #[arg(long)]
        prune: bool,

        /// ドライラン（保存・削除しない）
        #[arg(long)]
        dry_run: bool,
    },

    /// 設定を表示/編集
    Config {
        /// カタログのパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 表示言語を設定 (pt/en/es)
        #[arg(long)]
        set_language: Option<Language>,

        /// サイトのURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
