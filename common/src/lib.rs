//! Cartas Common Library
//!
//! CLIとWeb(WASM)で共有される型・フィルタ・ギャラリー状態

pub mod types;
pub mod error;
pub mod catalog;
pub mod filter;
pub mod sort;
pub mod pagination;
pub mod modal;
pub mod card;
pub mod url_state;
pub mod gallery;
pub mod language;
pub mod classify;
pub mod ocr_quality;
pub mod export;

pub use types::{CatalogDocument, LetterRecord};
pub use error::{Error, Result};
pub use catalog::{parse_catalog, to_catalog_json, FilterOptions, DATA_PATH};
pub use filter::{filter_indices, FilterState, VolumeFilter};
pub use sort::{sort_indices, SortMode};
pub use pagination::{RenderPlan, EMPTY_MESSAGE, LOAD_ERROR_MESSAGE, LOAD_MORE_LABEL, PAGE_SIZE};
pub use modal::{Modal, ModalKey};
pub use card::{CardSummary, LetterDetail};
pub use url_state::{parse_query, shareable_url, to_query, UrlSeed};
pub use gallery::{Gallery, Intent, Update};
pub use language::{Language, LanguageChoice, LanguageNotice};
