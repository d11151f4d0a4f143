//! サイト表示言語の設定
//!
//! 選択した言語はブラウザの localStorage（キー `site-language`）に保存する。
//! 翻訳本体はまだなく、選択時に通知を出すだけ。

use serde::{Deserialize, Serialize};

/// localStorage のキー
pub const STORAGE_KEY: &str = "site-language";

/// 通知を消すまでの時間
pub const NOTIFICATION_MS: u32 = 3000;
/// 退場アニメーションの時間
pub const NOTIFICATION_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Pt, Language::En, Language::Es];

    /// 保存値（"pt" / "en" / "es"）
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::Pt => "🇧🇷",
            Language::En => "🇺🇸",
            Language::Es => "🇪🇸",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "PT",
            Language::En => "EN",
            Language::Es => "ES",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Pt => "Português",
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(code.trim()))
    }

    /// 保存値から復元。未保存・不明な値はポルトガル語
    pub fn from_storage(value: Option<&str>) -> Self {
        value.and_then(Self::from_code).unwrap_or_default()
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown language: {}. Use pt, en or es", s))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 言語選択時の通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageNotice {
    pub title: String,
    pub note: String,
}

impl LanguageNotice {
    pub fn for_language(language: Language) -> Self {
        Self {
            title: format!("Idioma selecionado: {}", language.name()),
            note: "Tradução em breve disponível".to_string(),
        }
    }
}

/// 言語メニューの選択結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChoice {
    /// 対応ページへ移動
    Navigate(String),
    /// その場で表示を切り替えて通知
    Notify(LanguageNotice),
}

/// 言語を選んだときの動作（URL付きの項目はページ移動）
pub fn choose_language(language: Language, url: Option<&str>) -> LanguageChoice {
    match url.filter(|u| !u.is_empty()) {
        Some(url) => LanguageChoice::Navigate(url.to_string()),
        None => LanguageChoice::Notify(LanguageNotice::for_language(language)),
    }
}
