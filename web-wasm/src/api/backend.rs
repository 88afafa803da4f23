//! fetch + FormData によるバックエンド呼び出し

use freshtech_common::{Backend, Endpoint, Error, MultipartPayload, Result, DEFAULT_BACKEND_URL};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

/// ビルド時に `FRESHTECH_BACKEND_URL` で差し替え可能
pub const BACKEND_URL: &str = match option_env!("FRESHTECH_BACKEND_URL") {
    Some(url) => url,
    None => DEFAULT_BACKEND_URL,
};

#[derive(Clone, Debug)]
pub struct FetchBackend {
    base_url: String,
}

impl FetchBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for FetchBackend {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

/// payloadからFormDataを組み立てる（Content-Typeの境界はブラウザが付ける）
fn build_form_data(payload: &MultipartPayload) -> std::result::Result<FormData, JsValue> {
    let form = FormData::new()?;
    for part in payload.parts() {
        let bytes = js_sys::Uint8Array::from(part.file.bytes.as_slice());
        let sequence = js_sys::Array::new();
        sequence.push(&bytes);

        let options = BlobPropertyBag::new();
        options.set_type(&part.file.mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&sequence, &options)?;

        form.append_with_blob_and_filename(&part.field, &blob, &part.file.file_name)?;
    }
    Ok(form)
}

async fn post_form(url: &str, form: &FormData) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

impl Backend for FetchBackend {
    async fn post_multipart(&self, endpoint: Endpoint, payload: &MultipartPayload) -> Result<String> {
        let url = endpoint.url(&self.base_url);
        let outcome = match build_form_data(payload) {
            Ok(form) => post_form(&url, &form).await,
            Err(e) => Err(e),
        };

        outcome.map_err(|e| {
            let cause = format!("{}: {:?}", endpoint, e);
            web_sys::console::error_1(&JsValue::from_str(&format!("Error calling {}", cause)));
            Error::Transport(cause)
        })
    }
}
