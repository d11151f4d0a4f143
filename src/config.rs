use crate::error::{CartasError, Result};
use cartas_common::{Language, SortMode, PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "CARTAS_CATALOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// data/cartas.json
    pub catalog_path: PathBuf,
    /// 画像の置き場所（assets/cartas）
    pub assets_dir: PathBuf,
    pub page_size: usize,
    pub default_sort: SortMode,
    pub language: Language,
    /// OCRレポートのリンク先
    pub site_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("設定を読み込み: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CartasError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cartas").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            catalog_path: PathBuf::from(cartas_common::DATA_PATH),
            assets_dir: PathBuf::from("assets/cartas"),
            page_size: PAGE_SIZE,
            default_sort: SortMode::default(),
            language: Language::default(),
            site_base_url: "https://example.org/cartas.html".into(),
        }
    }

    /// 使用するカタログ（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_catalog(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| self.catalog_path.clone())
    }

    pub fn set_catalog(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = path;
        self.save()
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.language = language;
        self.save()
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(CartasError::Config("URLが空です".into()));
        }
        self.site_base_url = url.trim().to_string();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog_path, PathBuf::from("data/cartas.json"));
        assert_eq!(config.page_size, 24);
        assert_eq!(config.default_sort, SortMode::Page);
        assert_eq!(config.language, Language::Pt);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"page_size": 12, "language": "es"}"#).unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.language, Language::Es);
        assert_eq!(config.assets_dir, PathBuf::from("assets/cartas"));
    }

    #[test]
    fn test_resolve_catalog_prefers_argument() {
        let config = Config::default();
        let path = config.resolve_catalog(Some(PathBuf::from("/tmp/outra.json")));
        assert_eq!(path, PathBuf::from("/tmp/outra.json"));
    }
}
