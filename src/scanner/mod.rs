//! 画像フォルダの走査とカタログへの取り込み
//!
//! `vol{V}_p{PPP}_img{K}.jpg` 形式の画像を集め、小さすぎるもの・
//! 低解像度のもの・内容が重複するものを除いてカタログに追加する。

mod inspect;

pub use inspect::{file_hash, inspect_image, Inspection};

use crate::error::{CartasError, Result};
use cartas_common::LetterRecord;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// 50 KiB 未満は汎用アイコン等
pub const MIN_FILE_SIZE: u64 = 50 * 1024;
/// 幅・高さの最小値
pub const MIN_DIMENSION: u32 = 200;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

lazy_static::lazy_static! {
    static ref IMAGE_NAME_RE: Regex = Regex::new(r"^vol(\d+)_p(\d+)_img(\d+)$").unwrap();
}

#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub min_file_size: u64,
    pub min_dimension: u32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_file_size: MIN_FILE_SIZE,
            min_dimension: MIN_DIMENSION,
        }
    }
}

/// ファイル名から (巻, ページ, 画像番号)
pub fn parse_image_name(stem: &str) -> Option<(u32, u32, u32)> {
    let caps = IMAGE_NAME_RE.captures(stem)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?))
}

/// 採用した画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedImage {
    pub path: PathBuf,
    /// 拡張子なしのファイル名（レコードID）
    pub id: String,
    pub volume: u32,
    pub page: u32,
    pub bytes: u64,
    pub hash: String,
}

/// 除外理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooSmall { bytes: u64 },
    LowResolution { width: u32, height: u32 },
    /// 先に見つかった同一内容のID
    Duplicate { of: String },
    Unreadable(String),
}

impl Rejection {
    /// 削除対象か（読めないファイルは残す）
    pub fn is_prunable(&self) -> bool {
        !matches!(self, Rejection::Unreadable(_))
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::TooSmall { bytes } => write!(f, "pequena ({:.1}KB)", *bytes as f64 / 1024.0),
            Rejection::LowResolution { width, height } => write!(f, "baixa resolução ({}x{})", width, height),
            Rejection::Duplicate { of } => write!(f, "duplicata de {}", of),
            Rejection::Unreadable(e) => write!(f, "ilegível: {}", e),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// ファイル名順
    pub accepted: Vec<ScannedImage>,
    pub rejected: Vec<(PathBuf, Rejection)>,
    /// 命名規則に合わない画像
    pub ignored: Vec<PathBuf>,
}

/// 画像ファイルを列挙（サブフォルダを含む、パス順）
fn collect_image_paths(folder: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(folder)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    paths
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner} [{bar:40}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    bar.set_style(style);
    bar
}

/// フォルダを走査
pub fn scan_folder(folder: &Path, options: ScanOptions) -> Result<ScanReport> {
    if !folder.is_dir() {
        return Err(CartasError::FolderNotFound(folder.display().to_string()));
    }

    let mut report = ScanReport::default();
    let mut named = Vec::new();
    for path in collect_image_paths(folder) {
        let stem = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        match parse_image_name(&stem) {
            Some((volume, page, _)) => named.push((path, stem, volume, page)),
            None => {
                log::debug!("命名規則外のためスキップ: {}", path.display());
                report.ignored.push(path);
            }
        }
    }

    let bar = progress_bar(named.len());
    let inspections: Vec<_> = named
        .par_iter()
        .map(|(path, ..)| {
            let result = inspect_image(path, options.min_file_size, options.min_dimension);
            bar.inc(1);
            result
        })
        .collect();
    bar.finish_and_clear();

    // 重複はパス順で最初のものを残す
    let mut seen: HashMap<String, String> = HashMap::new();
    for ((path, id, volume, page), inspection) in named.into_iter().zip(inspections) {
        match inspection {
            Ok(Inspection::TooSmall { bytes }) => report.rejected.push((path, Rejection::TooSmall { bytes })),
            Ok(Inspection::LowResolution { width, height }) => {
                report.rejected.push((path, Rejection::LowResolution { width, height }))
            }
            Ok(Inspection::Candidate { bytes, hash }) => {
                if let Some(first) = seen.get(&hash) {
                    report.rejected.push((path, Rejection::Duplicate { of: first.clone() }));
                    continue;
                }
                seen.insert(hash.clone(), id.clone());
                report.accepted.push(ScannedImage { path, id, volume, page, bytes, hash });
            }
            Err(e) => {
                log::warn!("{:#}", e);
                report.rejected.push((path, Rejection::Unreadable(e.to_string())));
            }
        }
    }

    Ok(report)
}

/// サイトルートからの相対URL（区切りは `/`）
pub fn image_url_for(path: &Path, site_root: &Path) -> Option<String> {
    let relative = path.strip_prefix(site_root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// 採用した画像をカタログに追加し、追加件数を返す
///
/// 既存IDのレコードはメタデータを保持する。結果は巻→ページ→ID順。
pub fn merge_into_catalog(catalog: &mut Vec<LetterRecord>, images: &[ScannedImage], site_root: &Path) -> usize {
    let mut added = 0;
    for image in images {
        if catalog.iter().any(|r| r.id == image.id) {
            continue;
        }
        let file_name = image
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("{}.jpg", image.id));
        let image_url = image_url_for(&image.path, site_root)
            .unwrap_or_else(|| format!("assets/cartas/vol{}/{}", image.volume, file_name));

        catalog.push(LetterRecord {
            id: image.id.clone(),
            image_url,
            volume: image.volume,
            page: image.page,
            ..Default::default()
        });
        added += 1;
    }

    catalog.sort_by(|a, b| (a.volume, a.page, &a.id).cmp(&(b.volume, b.page, &b.id)));
    added
}

/// 除外した画像を削除し、削除件数を返す
pub fn prune_rejected(report: &ScanReport) -> Result<usize> {
    let mut removed = 0;
    for (path, rejection) in &report.rejected {
        if rejection.is_prunable() {
            std::fs::remove_file(path)?;
            log::info!("削除: {} ({})", path.display(), rejection);
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_name() {
        assert_eq!(parse_image_name("vol1_p028_img1"), Some((1, 28, 1)));
        assert_eq!(parse_image_name("vol2_p100_img3"), Some((2, 100, 3)));
        assert_eq!(parse_image_name("capa"), None);
        assert_eq!(parse_image_name("vol1_p028"), None);
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), ScanOptions::default());
        assert!(matches!(result, Err(CartasError::FolderNotFound(_))));
    }

    #[test]
    fn test_image_url_for() {
        let url = image_url_for(
            Path::new("/site/assets/cartas/vol1/vol1_p028_img1.jpg"),
            Path::new("/site"),
        );
        assert_eq!(url.as_deref(), Some("assets/cartas/vol1/vol1_p028_img1.jpg"));
        assert_eq!(image_url_for(Path::new("/outro/a.jpg"), Path::new("/site")), None);
    }

    #[test]
    fn test_merge_keeps_existing_metadata() {
        let mut catalog = vec![LetterRecord {
            id: "vol1_p002_img1".into(),
            image_url: "assets/cartas/vol1/vol1_p002_img1.jpg".into(),
            volume: 1,
            page: 2,
            year: Some(1970),
            ..Default::default()
        }];
        let image = |id: &str, volume, page| ScannedImage {
            path: PathBuf::from(format!("/site/assets/cartas/vol{}/{}.jpg", volume, id)),
            id: id.to_string(),
            volume,
            page,
            bytes: 0,
            hash: String::new(),
        };
        let images = vec![image("vol1_p002_img1", 1, 2), image("vol1_p001_img1", 1, 1)];

        let added = merge_into_catalog(&mut catalog, &images, Path::new("/site"));
        assert_eq!(added, 1);
        assert_eq!(catalog[0].id, "vol1_p001_img1");
        assert_eq!(catalog[0].image_url, "assets/cartas/vol1/vol1_p001_img1.jpg");
        assert_eq!(catalog[1].year, Some(1970));
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(Rejection::TooSmall { bytes: 2048 }.to_string(), "pequena (2.0KB)");
        assert_eq!(Rejection::Duplicate { of: "a".into() }.to_string(), "duplicata de a");
        assert!(!Rejection::Unreadable("x".into()).is_prunable());
    }
}
