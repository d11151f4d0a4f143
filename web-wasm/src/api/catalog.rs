//! カタログ（data/cartas.json）の取得

use cartas_common::{CatalogDocument, Error, LetterRecord};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// カタログを取得（起動時に1回だけ呼ぶ、再試行しない）
pub async fn fetch_catalog(path: &str) -> cartas_common::Result<Vec<LetterRecord>> {
    request_catalog(path)
        .await
        .map_err(|e| Error::Load(e.as_string().unwrap_or_else(|| format!("{:?}", e))))
}

async fn request_catalog(path: &str) -> Result<Vec<LetterRecord>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(path, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let document: CatalogDocument = serde_wasm_bindgen::from_value(json)?;
    Ok(document.cartas)
}
